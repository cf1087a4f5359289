mod settings;

pub use settings::{
    DatabaseSettings, OpenAiSettings, ServerSettings, Settings, SettingsError, StorageSettings,
    SummarizationSettings, TranscriptionSettings,
};
