use std::path::PathBuf;
use std::sync::Arc;

use iced::widget::{Canvas, button, column, container, image as iced_image, scrollable, text};
use iced::{Alignment, Application, Command, Element, Length, Theme};

use crate::detection::preprocessing::open_image;
use crate::detection::{Annotator, FoodDetector};
use crate::pipeline::Analyzer;

use super::AppFlags;
use super::chart::PieChart;
use super::message::Message;
use super::state::{Analysis, AppState};

const IMAGE_WIDTH: f32 = 480.0;
const CHART_SIZE: f32 = 300.0;

pub struct NutriscanApp {
    analyzer: Arc<Analyzer<FoodDetector>>,
    annotator: Arc<Annotator>,
    state: AppState,
}

impl Application for NutriscanApp {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = AppFlags;

    fn new(flags: AppFlags) -> (Self, Command<Message>) {
        (
            Self {
                analyzer: flags.analyzer,
                annotator: flags.annotator,
                state: AppState::Idle,
            },
            Command::none(),
        )
    }

    fn title(&self) -> String {
        "Nutriscan - Image-Based Nutritional Analyzer".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::OpenImage => {
                self.state = AppState::Working;
                Command::perform(pick_image(), Message::ImagePicked)
            }
            Message::ImagePicked(None) => {
                self.state = AppState::Idle;
                Command::none()
            }
            Message::ImagePicked(Some(path)) => {
                let analyzer = self.analyzer.clone();
                let annotator = self.annotator.clone();
                Command::perform(analyze(analyzer, annotator, path), Message::AnalysisFinished)
            }
            Message::AnalysisFinished(Ok(analysis)) => {
                self.state = AppState::Ready(analysis);
                Command::none()
            }
            Message::AnalysisFinished(Err(message)) => {
                self.state = AppState::Failed(message);
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<Message> {
        let mut content = column![
            text("Nutriscan").size(32),
            button("Open image...").on_press(Message::OpenImage),
        ]
        .spacing(20)
        .padding(20)
        .align_items(Alignment::Center);

        match &self.state {
            AppState::Idle => {
                content = content.push(text("Upload a food photo to analyze it."));
            }
            AppState::Working => {
                content = content.push(text("Analyzing..."));
            }
            AppState::Failed(message) => {
                content = content.push(text(format!("Error: {message}")));
            }
            AppState::Ready(analysis) => {
                content = self.results(content, analysis);
            }
        }

        container(scrollable(content))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x()
            .into()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

impl NutriscanApp {
    fn results<'a>(
        &self,
        mut content: iced::widget::Column<'a, Message>,
        analysis: &'a Analysis,
    ) -> iced::widget::Column<'a, Message> {
        let report = &analysis.report;
        if report.detections.is_empty() {
            return content.push(text("No food items detected."));
        }

        let rgba = image::DynamicImage::ImageRgb8(analysis.annotated.clone()).to_rgba8();
        let (width, height) = rgba.dimensions();
        let handle = iced_image::Handle::from_pixels(width, height, rgba.into_raw());
        content = content.push(
            iced_image::Image::new(handle).width(Length::Fixed(IMAGE_WIDTH)),
        );

        if report.matched.is_empty() {
            return content.push(text("No nutrition information found for detected items."));
        }

        content = content.push(text("Nutrition Summary").size(24));
        content = content.push(text(report.summary_text.clone()));

        if report.breakdown.is_empty() {
            content.push(text("No macronutrient data to chart."))
        } else {
            content.push(
                Canvas::new(PieChart::new(report.breakdown))
                    .width(Length::Fixed(CHART_SIZE))
                    .height(Length::Fixed(CHART_SIZE)),
            )
        }
    }
}

async fn pick_image() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .add_filter("Images", &["png", "jpg", "jpeg"])
        .set_title("Choose a food photo")
        .pick_file()
        .await
        .map(|file| file.path().to_path_buf())
}

async fn analyze(
    analyzer: Arc<Analyzer<FoodDetector>>,
    annotator: Arc<Annotator>,
    path: PathBuf,
) -> Result<Analysis, String> {
    let img = open_image(&path).map_err(|e| e.to_string())?;
    let report = analyzer.analyze(&img).map_err(|e| e.to_string())?;
    let annotated = annotator.annotate(&img, &report.detections);
    Ok(Analysis { annotated, report })
}
