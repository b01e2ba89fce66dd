pub mod api;
pub mod column_prefs;
pub mod components;
pub mod export;
pub mod format;
pub mod icons;
pub mod list_controller;
pub mod loading;
pub mod lookups;
pub mod notifications;
pub mod refresh;
