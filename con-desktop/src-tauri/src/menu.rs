//! Native application menu.

use con_core::menu::MenuCommand;
use tauri::menu::{Menu, MenuBuilder, MenuItem, MenuItemBuilder, SubmenuBuilder};
use tauri::{AppHandle, Manager, Runtime};

use crate::app::AppState;

fn command_item<R: Runtime>(app: &AppHandle<R>, command: MenuCommand) -> tauri::Result<MenuItem<R>> {
    let mut builder = MenuItemBuilder::with_id(command.event_name(), command.label());
    if let Some(accelerator) = command.accelerator() {
        builder = builder.accelerator(accelerator);
    }
    builder.build(app)
}

/// File, Edit and Tools menus. Custom items use the command's event name as id.
pub fn build_menu<R: Runtime>(app: &AppHandle<R>) -> tauri::Result<Menu<R>> {
    let file = SubmenuBuilder::new(app, "File")
        .item(&command_item(app, MenuCommand::NewConference)?)
        .item(&command_item(app, MenuCommand::OpenRepo)?)
        .separator()
        .quit()
        .build()?;

    let edit = SubmenuBuilder::new(app, "Edit")
        .undo()
        .redo()
        .separator()
        .cut()
        .copy()
        .paste()
        .build()?;

    let tools = SubmenuBuilder::new(app, "Tools")
        .item(&command_item(app, MenuCommand::SyncWebsite)?)
        .item(&command_item(app, MenuCommand::ValidateData)?)
        .build()?;

    MenuBuilder::new(app)
        .item(&file)
        .item(&edit)
        .item(&tools)
        .build()
}

/// Forwards a clicked custom item to the menu notifier. Predefined items
/// (quit, clipboard) are handled by the platform.
pub fn handle_menu_event<R: Runtime>(app: &AppHandle<R>, id: &str) {
    let Some(command) = MenuCommand::from_event_name(id) else {
        return;
    };
    let listeners = app.state::<AppState>().menu_notifier.notify(command);
    tracing::debug!("[Menu] {} delivered to {} listener(s)", id, listeners);
}
