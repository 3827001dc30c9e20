use iced::widget::{button, column, container, row, text, text_input, Column, Image};
use iced::{Alignment, ContentFit, Element, Length, Task, Theme};
use iced_aw::date_picker::Date;
use iced_aw::helpers::date_picker;
use rfd::FileDialog;
use std::path::PathBuf;

// Declare the application modules
mod format;
mod render;
mod state;

use format::ThaiBuddhistLocale;
use render::export;
use render::postcard::PostcardSurface;
use render::typeface::Typeface;
use state::form::FormState;
use state::photo::{Photo, IMAGE_EXTENSIONS};

/// Fixed square size of the photo area in the live preview
const PHOTO_PREVIEW_SIZE: f32 = 256.0;

/// Main application state
struct PostcardMaker {
    /// The live form values behind the preview
    form: FormState,
    /// Locale configuration passed explicitly into the date formatter
    locale: ThaiBuddhistLocale,
    /// Typeface for export composition; None disables export
    typeface: Option<Typeface>,
    /// Last submitted picker value, kept so reopening shows it again
    picked: Option<Date>,
    /// Whether the calendar overlay is open
    show_picker: bool,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User opened the calendar overlay
    ChooseDate,
    /// User confirmed a date in the overlay
    SubmitDate(Date),
    /// User dismissed the overlay without choosing
    CancelDate,
    /// User cleared the date field
    ClearDate,
    /// Name field edited
    NameChanged(String),
    /// User clicked the photo picker button
    ChoosePhoto,
    /// User clicked the download button
    Export,
    /// Background export finished
    ExportComplete(Result<PathBuf, String>),
}

impl PostcardMaker {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let typeface = Typeface::discover();

        let status = if typeface.is_some() {
            "Ready.".to_string()
        } else {
            "Ready, but no typeface was found - export is disabled.".to_string()
        };

        println!("🖼️  Postcard maker initialized");

        (
            PostcardMaker {
                form: FormState::default(),
                locale: ThaiBuddhistLocale::default(),
                typeface,
                picked: None,
                show_picker: false,
                status,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ChooseDate => {
                self.show_picker = true;
                Task::none()
            }
            Message::SubmitDate(date) => {
                self.show_picker = false;

                // An unrepresentable picker value degrades to the cleared
                // state rather than raising an error
                let parsed =
                    chrono::NaiveDate::from_ymd_opt(date.year, date.month, date.day);
                self.form.date = format::display_date(parsed, &self.locale);
                self.picked = Some(date);

                Task::none()
            }
            Message::CancelDate => {
                self.show_picker = false;
                Task::none()
            }
            Message::ClearDate => {
                self.picked = None;
                self.form.date.clear();
                Task::none()
            }
            Message::NameChanged(name) => {
                // Reflected verbatim: no trimming, no length limit
                self.form.name = name;
                Task::none()
            }
            Message::ChoosePhoto => {
                // Show the native file picker dialog
                let file = FileDialog::new()
                    .set_title("เลือกรูปภาพ")
                    .add_filter("Images", &IMAGE_EXTENSIONS)
                    .pick_file();

                // A cancelled dialog leaves the current photo untouched
                if let Some(path) = file {
                    match Photo::load(&path) {
                        Ok(photo) => {
                            self.status = format!("📷 Selected {}", photo.file_name());
                            self.form.replace_photo(photo);
                        }
                        Err(error) => {
                            eprintln!("⚠️  Could not load {}: {}", path.display(), error);
                            self.form.clear_photo();
                            self.status = "Selected file could not be decoded.".to_string();
                        }
                    }
                }

                Task::none()
            }
            Message::Export => {
                self.status = "Exporting postcard...".to_string();

                // Snapshot the surface now; later edits do not affect an
                // export already in flight, and repeated triggers run as
                // independent attempts
                let surface = self.surface();

                Task::perform(
                    export::export(surface, export::output_path()),
                    |result| Message::ExportComplete(result.map_err(|error| error.to_string())),
                )
            }
            Message::ExportComplete(Ok(path)) => {
                println!("✅ Postcard saved to {}", path.display());
                self.status = format!("✅ Saved {}", path.display());
                Task::none()
            }
            Message::ExportComplete(Err(error)) => {
                eprintln!("⚠️  Postcard export failed: {}", error);
                self.status = format!("⚠️ Export failed: {}", error);
                Task::none()
            }
        }
    }

    /// The renderable surface handed to the export action.
    /// Absent when no typeface could be loaded at startup.
    fn surface(&self) -> Option<PostcardSurface> {
        let typeface = self.typeface.clone()?;
        Some(PostcardSurface::new(&self.form, typeface))
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let picker_label = if self.form.date.is_empty() {
            text("เลือกวันที่")
        } else {
            text(&self.form.date)
        };

        let picker = date_picker(
            self.show_picker,
            self.picked.clone().unwrap_or_else(Date::today),
            button(picker_label).on_press(Message::ChooseDate).padding(10),
            Message::CancelDate,
            Message::SubmitDate,
        );

        let form_card = column![
            text("เลือกวันที่:").size(16),
            row![
                picker,
                button(text("ล้าง"))
                    .on_press_maybe(self.picked.is_some().then_some(Message::ClearDate))
                    .padding(10),
            ]
            .spacing(10),
            text("ชื่อ:").size(16),
            text_input("ชื่อของคุณ", &self.form.name)
                .on_input(Message::NameChanged)
                .padding(10),
            text("อัปโหลดรูปภาพ:").size(16),
            button(text("เลือกไฟล์"))
                .on_press(Message::ChoosePhoto)
                .padding(10),
        ]
        .spacing(8);

        // The photo area: the selected image cover-fitted to a fixed
        // square, or the placeholder panel
        let photo_panel: Element<Message> = match &self.form.photo {
            Some(photo) => Image::new(photo.handle())
                .content_fit(ContentFit::Cover)
                .width(PHOTO_PREVIEW_SIZE)
                .height(PHOTO_PREVIEW_SIZE)
                .into(),
            None => container(
                text("ไม่มีรูปภาพ").color(iced::Color::from_rgb8(0x6B, 0x72, 0x80)),
            )
            .center_x(PHOTO_PREVIEW_SIZE)
            .center_y(PHOTO_PREVIEW_SIZE)
            .style(placeholder_style)
            .into(),
        };

        // The postcard preview: a pure function of the form state, in
        // fixed order - title, date (or blank), name (or blank), photo
        let postcard = container(
            column![
                text("โปสการ์ด").size(28),
                text(&self.form.date).size(18),
                text(&self.form.name).size(18),
                photo_panel,
            ]
            .spacing(8)
            .padding(32)
            .align_x(Alignment::Center),
        )
        .style(postcard_style);

        let content: Column<Message> = column![
            text("สร้างโปสการ์ดของคุณ").size(32),
            form_card,
            postcard,
            button(text("ดาวน์โหลดโปสการ์ด"))
                .on_press(Message::Export)
                .padding(10),
            text(&self.status).size(14),
        ]
        .spacing(20)
        .padding(40)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// Soft card background with a rounded gray border, like the preview
fn postcard_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(iced::Color::from_rgb8(
            0xF0, 0xF4, 0xF8,
        ))),
        border: iced::Border {
            color: iced::Color::from_rgb8(0xD1, 0xD5, 0xDB),
            width: 4.0,
            radius: 12.0.into(),
        },
        ..container::Style::default()
    }
}

/// Gray panel shown while no photo is selected
fn placeholder_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(iced::Color::from_rgb8(
            0xD1, 0xD5, 0xDB,
        ))),
        border: iced::Border {
            color: iced::Color::from_rgb8(0xD1, 0xD5, 0xDB),
            width: 1.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}

fn main() -> iced::Result {
    iced::application(
        "สร้างโปสการ์ดของคุณ",
        PostcardMaker::update,
        PostcardMaker::view,
    )
    .theme(PostcardMaker::theme)
    .font(iced_fonts::REQUIRED_FONT_BYTES)
    .centered()
    .run_with(PostcardMaker::new)
}
