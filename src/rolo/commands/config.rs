use crate::commands::{CmdMessage, CmdResult};
use crate::config::{RoloConfig, CONFIG_FILENAME};
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut result = match action {
        ConfigAction::ShowAll => {
            let config = RoloConfig::load(config_dir)?;
            CmdResult::default().with_config(config)
        }
        ConfigAction::ShowKey(key) => {
            let config = RoloConfig::load(config_dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            result
        }
        ConfigAction::Set(key, value) => {
            let mut config = RoloConfig::load(config_dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e.to_string()));
                return Ok(res);
            }
            config.save(config_dir)?;
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            result
        }
    };
    result.config_path = Some(config_dir.join(CONFIG_FILENAME));
    Ok(result)
}
