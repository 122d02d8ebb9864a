pub mod conferences;
pub mod config;
pub mod dispatch;
pub mod files;
pub mod git;
pub mod paths;
pub mod sessions;
pub mod workflow;
pub mod youtube;

use con_core::gateway::GatewayError;

/// Commands reject with the serialized `{kind, message}` gateway error.
pub type CommandResult<T> = Result<T, GatewayError>;

pub fn handlers() -> impl Fn(tauri::ipc::Invoke<tauri::Wry>) -> bool + Send + Sync + 'static {
    tauri::generate_handler![
        config::config_get,
        config::config_set,
        config::config_get_all,
        files::fs_read_file,
        files::fs_write_file,
        files::fs_read_dir,
        files::fs_exists,
        conferences::conference_list,
        conferences::conference_load,
        conferences::conference_save,
        conferences::conference_delete,
        sessions::session_list,
        sessions::session_load,
        sessions::session_save,
        sessions::session_delete,
        youtube::youtube_validate_url,
        youtube::youtube_extract_info,
        git::git_status,
        git::git_clone,
        git::git_add,
        git::git_commit,
        git::git_push,
        git::git_list_branches,
        git::git_create_branch,
        git::git_switch_branch,
        git::git_get_current_branch,
        git::git_has_uncommitted_changes,
        workflow::repo_save_changes,
        workflow::data_validate,
        paths::get_config_path,
        paths::get_logs_directory,
        dispatch::gateway_invoke,
    ]
}
