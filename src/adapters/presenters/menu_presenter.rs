//! MenuPresenter - builds the tray context menu model
//!
//! Layout: one item per entry in list order (or a disabled placeholder when
//! there are none), a separator, then Reload and Exit.

use crate::domain::entities::LaunchEntry;

/// Command id of "Reload"
pub const CMD_RELOAD: u32 = 1;
/// Command id of "Exit"
pub const CMD_EXIT: u32 = 2;
/// Command id of the placeholder item (never dispatched)
pub const CMD_PLACEHOLDER: u32 = 3;
/// Command id of the first launch entry; entry `i` is `CMD_FIRST_ENTRY + i`
pub const CMD_FIRST_ENTRY: u32 = 1000;

const PLACEHOLDER_LABEL: &str = "(no applications configured)";
const RELOAD_LABEL: &str = "Reload";
const EXIT_LABEL: &str = "Exit";

/// One row of the context menu
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuItem {
    Command { id: u32, label: String, enabled: bool },
    Separator,
}

/// What a clicked command id means
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuCommand {
    /// Launch entry at this index
    Launch(usize),
    Reload,
    Exit,
}

impl MenuCommand {
    /// Decode a command id against a list of `entry_count` entries
    pub fn from_id(id: u32, entry_count: usize) -> Option<Self> {
        match id {
            CMD_RELOAD => Some(MenuCommand::Reload),
            CMD_EXIT => Some(MenuCommand::Exit),
            id if id >= CMD_FIRST_ENTRY => {
                let index = (id - CMD_FIRST_ENTRY) as usize;
                (index < entry_count).then_some(MenuCommand::Launch(index))
            }
            _ => None,
        }
    }

    pub fn id(&self) -> u32 {
        match self {
            MenuCommand::Launch(index) => CMD_FIRST_ENTRY + *index as u32,
            MenuCommand::Reload => CMD_RELOAD,
            MenuCommand::Exit => CMD_EXIT,
        }
    }
}

/// Presenter for the tray menu
#[derive(Default)]
pub struct MenuPresenter;

impl MenuPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Build the menu for the given entries
    pub fn present(&self, entries: &[LaunchEntry]) -> Vec<MenuItem> {
        let mut items = Vec::with_capacity(entries.len() + 3);

        if entries.is_empty() {
            items.push(MenuItem::Command {
                id: CMD_PLACEHOLDER,
                label: PLACEHOLDER_LABEL.to_string(),
                enabled: false,
            });
        } else {
            items.extend(entries.iter().enumerate().map(|(i, entry)| MenuItem::Command {
                id: MenuCommand::Launch(i).id(),
                label: escape_mnemonic(&entry.display_name),
                enabled: true,
            }));
        }

        items.push(MenuItem::Separator);
        items.push(MenuItem::Command {
            id: CMD_RELOAD,
            label: RELOAD_LABEL.to_string(),
            enabled: true,
        });
        items.push(MenuItem::Command {
            id: CMD_EXIT,
            label: EXIT_LABEL.to_string(),
            enabled: true,
        });
        items
    }
}

/// Menus treat `&` as an accelerator prefix; show it literally
fn escape_mnemonic(label: &str) -> String {
    label.replace('&', "&&")
}
