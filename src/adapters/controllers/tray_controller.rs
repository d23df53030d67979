//! TrayController - Translates tray events to use case calls
//!
//! Owns the current entry list. The list is replaced wholesale on every
//! reload and never edited in place.

use std::rc::Rc;

use crate::adapters::presenters::{MenuCommand, MenuItem, MenuPresenter};
use crate::application::ports::ElevationPort;
use crate::application::services::Notifier;
use crate::application::use_cases::{ConfigLoader, Launcher};
use crate::domain::entities::LaunchEntry;

/// Title of the reload summary toast
pub const RELOAD_TITLE: &str = "Applications reloaded";

/// Tray events (platform-independent)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrayMessage {
    /// Icon right-clicked or double-clicked
    MenuRequested,
    /// A menu command id was picked
    Command(u32),
    /// Reload requested outside the menu
    ReloadRequested,
    /// Exit requested outside the menu
    ExitRequested,
}

/// Result of handling a tray event
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControllerResult {
    /// No action needed
    None,
    /// Display this menu at the cursor
    ShowMenu(Vec<MenuItem>),
    /// Exit application
    Exit,
}

/// Glue between the tray shell and the use cases
pub struct TrayController<E: ElevationPort> {
    loader: ConfigLoader,
    launcher: Launcher<E>,
    notifier: Rc<Notifier>,
    presenter: MenuPresenter,
    entries: Vec<LaunchEntry>,
    show_load_summary: bool,
}

impl<E: ElevationPort> TrayController<E> {
    pub fn new(loader: ConfigLoader, launcher: Launcher<E>, notifier: Rc<Notifier>) -> Self {
        Self {
            loader,
            launcher,
            notifier,
            presenter: MenuPresenter::new(),
            entries: Vec::new(),
            show_load_summary: true,
        }
    }

    /// Builder pattern: toggle the toast after a manual reload
    pub fn with_load_summary(mut self, show: bool) -> Self {
        self.show_load_summary = show;
        self
    }

    /// Initial load at startup; silent on success
    pub fn startup(&mut self) {
        self.reload(false);
    }

    /// Re-read the configuration and replace the list.
    ///
    /// With `announce`, a successful read is summarized in an info toast.
    /// Returns the number of usable entries.
    pub fn reload(&mut self, announce: bool) -> usize {
        let catalog = self.loader.load_catalog_or_empty();

        if announce && self.show_load_summary && catalog.total > 0 {
            self.notifier.info(
                RELOAD_TITLE,
                &format!(
                    "Loaded {} of {} applications.",
                    catalog.entries.len(),
                    catalog.total
                ),
            );
        }

        self.entries = catalog.entries;
        self.entries.len()
    }

    pub fn entries(&self) -> &[LaunchEntry] {
        &self.entries
    }

    /// Current context menu
    pub fn menu(&self) -> Vec<MenuItem> {
        self.presenter.present(&self.entries)
    }

    /// Launch the entry at `index`; `false` if out of range or refused
    pub fn launch(&self, index: usize) -> bool {
        match self.entries.get(index) {
            Some(entry) => self.launcher.launch_entry(entry),
            None => {
                log_warn!("TrayController: no entry at index {}", index);
                false
            }
        }
    }

    /// Handle one tray event
    pub fn handle_message(&mut self, msg: TrayMessage) -> ControllerResult {
        match msg {
            TrayMessage::MenuRequested => ControllerResult::ShowMenu(self.menu()),
            TrayMessage::Command(id) => self.handle_command(id),
            TrayMessage::ReloadRequested => {
                self.reload(true);
                ControllerResult::None
            }
            TrayMessage::ExitRequested => ControllerResult::Exit,
        }
    }

    fn handle_command(&mut self, id: u32) -> ControllerResult {
        match MenuCommand::from_id(id, self.entries.len()) {
            Some(MenuCommand::Launch(index)) => {
                self.launch(index);
                ControllerResult::None
            }
            Some(MenuCommand::Reload) => {
                self.reload(true);
                ControllerResult::None
            }
            Some(MenuCommand::Exit) => ControllerResult::Exit,
            None => {
                log_warn!("TrayController: ignoring unknown command id {}", id);
                ControllerResult::None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;
    use crate::adapters::presenters::menu_presenter::{CMD_EXIT, CMD_FIRST_ENTRY, CMD_RELOAD};
    use crate::application::ports::elevation_port::testing::RecordingElevationPort;
    use crate::application::ports::notification_port::testing::RecordingNotificationPort;
    use crate::application::ports::{NullElevationPort, NullNotificationPort, Severity};

    struct Fixture {
        _dir: TempDir,
        apps_file: PathBuf,
        notifications: Rc<RecordingNotificationPort>,
        controller: TrayController<RecordingElevationPort>,
    }

    fn fixture(apps_json: Option<&str>) -> Fixture {
        let dir = TempDir::new().unwrap();
        let apps_file = dir.path().join("apps.json");
        if let Some(content) = apps_json {
            fs::write(&apps_file, content).unwrap();
        }

        let notifications = Rc::new(RecordingNotificationPort::new());
        let notifier = Rc::new(Notifier::new(notifications.clone()));
        let loader = ConfigLoader::new(&apps_file, Rc::clone(&notifier));
        let launcher = Launcher::new(RecordingElevationPort::accepting(), Rc::clone(&notifier));
        let controller = TrayController::new(loader, launcher, notifier);

        Fixture {
            _dir: dir,
            apps_file,
            notifications,
            controller,
        }
    }

    const TWO_APPS: &str = r#"[
        { "Path": "C:\\Windows\\System32\\notepad.exe", "DisplayName": "Notepad" },
        { "Path": "C:\\Windows\\System32\\cmd.exe", "DisplayName": "Command Prompt" }
    ]"#;

    #[test]
    fn test_startup_loads_entries_silently() {
        let mut f = fixture(Some(TWO_APPS));
        f.controller.startup();

        assert_eq!(f.controller.entries().len(), 2);
        assert_eq!(f.notifications.count(), 0);
    }

    #[test]
    fn test_startup_without_file_warns() {
        let mut f = fixture(None);
        f.controller.startup();

        assert!(f.controller.entries().is_empty());
        assert_eq!(f.notifications.with_severity(Severity::Warning).len(), 1);
        assert_eq!(f.controller.menu().len(), 4);
    }

    #[test]
    fn test_menu_request_returns_menu() {
        let mut f = fixture(Some(TWO_APPS));
        f.controller.startup();

        match f.controller.handle_message(TrayMessage::MenuRequested) {
            ControllerResult::ShowMenu(items) => assert_eq!(items.len(), 5),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_launch_command_reaches_launcher() {
        let mut f = fixture(Some(TWO_APPS));
        f.controller.startup();

        let result = f
            .controller
            .handle_message(TrayMessage::Command(CMD_FIRST_ENTRY + 1));

        assert_eq!(result, ControllerResult::None);
        let requests = f.controller.launcher.port().requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].path,
            PathBuf::from("C:\\Windows\\System32\\cmd.exe")
        );
    }

    #[test]
    fn test_reload_replaces_list_and_announces() {
        let mut f = fixture(Some(TWO_APPS));
        f.controller.startup();

        fs::write(
            &f.apps_file,
            r#"[ { "Path": "x.exe", "DisplayName": "X" }, { "Path": "", "DisplayName": "Bad" } ]"#,
        )
        .unwrap();
        f.controller.handle_message(TrayMessage::Command(CMD_RELOAD));

        assert_eq!(f.controller.entries(), &[LaunchEntry::new("x.exe", "X")]);
        let infos = f.notifications.with_severity(Severity::Info);
        assert_eq!(infos.len(), 1);
        assert_eq!(infos[0].message, "Loaded 1 of 2 applications.");
    }

    #[test]
    fn test_reload_summary_can_be_disabled() {
        let mut f = fixture(Some(TWO_APPS));
        f.controller = f.controller.with_load_summary(false);

        f.controller.handle_message(TrayMessage::ReloadRequested);
        assert_eq!(f.controller.entries().len(), 2);
        assert_eq!(f.notifications.count(), 0);
    }

    #[test]
    fn test_reload_with_broken_file_empties_list() {
        let mut f = fixture(Some(TWO_APPS));
        f.controller.startup();

        fs::write(&f.apps_file, "[ broken").unwrap();
        assert_eq!(f.controller.reload(true), 0);
        assert!(f.controller.entries().is_empty());
        assert_eq!(f.notifications.with_severity(Severity::Error).len(), 1);
        assert!(f.notifications.with_severity(Severity::Info).is_empty());
    }

    #[test]
    fn test_exit() {
        let mut f = fixture(Some(TWO_APPS));
        assert_eq!(
            f.controller.handle_message(TrayMessage::Command(CMD_EXIT)),
            ControllerResult::Exit
        );
        assert_eq!(
            f.controller.handle_message(TrayMessage::ExitRequested),
            ControllerResult::Exit
        );
    }

    #[test]
    fn test_stale_command_is_ignored() {
        let mut f = fixture(None);
        f.controller.startup();

        let result = f
            .controller
            .handle_message(TrayMessage::Command(CMD_FIRST_ENTRY));
        assert_eq!(result, ControllerResult::None);
        assert!(!f.controller.launch(0));
        assert_eq!(f.controller.launcher.port().calls(), 0);
    }

    #[test]
    fn test_runs_headless_with_null_ports() {
        let dir = TempDir::new().unwrap();
        let apps_file = dir.path().join("apps.json");
        fs::write(&apps_file, TWO_APPS).unwrap();

        let notifier = Rc::new(Notifier::new(Rc::new(NullNotificationPort)));
        let loader = ConfigLoader::new(&apps_file, Rc::clone(&notifier));
        let launcher = Launcher::new(NullElevationPort, Rc::clone(&notifier));
        let mut controller = TrayController::new(loader, launcher, notifier);

        controller.startup();
        assert_eq!(controller.entries().len(), 2);
        assert!(controller.launch(1));
        assert_eq!(controller.reload(true), 2);
    }
}
