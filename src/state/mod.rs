/// State management module
///
/// This module holds all application state:
/// - The live form values behind the preview (form.rs)
/// - The currently selected photo and its lifecycle (photo.rs)

pub mod form;
pub mod photo;
