use crate::commands::{AddressBookPaths, CmdMessage, CmdResult};
use crate::error::Result;
use crate::registry::BookRegistry;
use crate::store::DataStore;
use std::fs;

pub fn run<S: DataStore>(paths: &AddressBookPaths, store: &mut S) -> Result<CmdResult> {
    fs::create_dir_all(&paths.home)?;
    let mut result = CmdResult::default();

    if paths.data_file.exists() {
        result.add_message(CmdMessage::info(format!(
            "Address books already stored at {}",
            paths.data_file.display()
        )));
    } else {
        store.save(&BookRegistry::new())?;
        result.add_message(CmdMessage::success(format!(
            "Initialized address book store at {}",
            paths.data_file.display()
        )));
    }
    Ok(result)
}
