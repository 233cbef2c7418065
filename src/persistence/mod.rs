use std::{
    fs,
    path::PathBuf,
};

use serde::{
    de::DeserializeOwned,
    Serialize,
};

use crate::core::TangoError;

const APP_NAME: &str = "tango";

pub fn app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), TangoError> {
    let file_path = app_data_dir().join(filename);
    let json = serde_json::to_string_pretty(data)?;
    fs::write(&file_path, json)?;
    Ok(())
}

pub fn load_json_or_default<T: DeserializeOwned + Default>(filename: &str) -> T {
    let file_path = app_data_dir().join(filename);

    if !file_path.exists() {
        return T::default();
    }

    match fs::read_to_string(&file_path).map_err(TangoError::from).and_then(|json| {
        serde_json::from_str::<T>(&json).map_err(TangoError::from)
    }) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Failed to load {}: {}. Using defaults.", filename, e);
            T::default()
        }
    }
}
