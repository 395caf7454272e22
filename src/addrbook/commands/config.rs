use crate::commands::{AddressBookPaths, CmdMessage, CmdResult};
use crate::config::AddressBookConfig;
use crate::error::{AddressBookError, Result};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Reads or changes `config.json` in the home directory.
///
/// Unknown keys and rejected values are `Config` errors; nothing is written
/// unless the new value was accepted.
pub fn run(paths: &AddressBookPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = AddressBookConfig::load(&paths.home)?;

    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key).ok_or_else(|| unknown_key(&key))?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(value));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(&paths.home)?;

            let stored = config.get(&key).ok_or_else(|| unknown_key(&key))?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::success(format!("{} set to {}", key, stored)));
            Ok(result.with_config(config))
        }
    }
}

fn unknown_key(key: &str) -> AddressBookError {
    AddressBookError::Config(format!("Unknown config key: {}", key))
}
