//! Command execution logic.
//!
//! Contains the `execute_command` function that runs parsed commands
//! against the virtual filesystem and session state.

use indexmap::IndexMap;

use crate::config::{HELP_TEXT, HOME_DIR, LS_SEPARATOR, messages, tree, warp};
use crate::core::{TerminalSession, VirtualFs, path};
use crate::error::{CommandError, FsError};
use crate::models::{Effect, Node};

use super::{AiRequest, Command, CommandResult, PathArg, grep_lines};

/// Execute a parsed command.
///
/// May update the session directly (`cd` changes the current directory,
/// `clear` empties the transcript). Output is returned, not appended.
pub fn execute_command(
    cmd: Command,
    session: &mut TerminalSession,
    fs: &mut VirtualFs,
) -> CommandResult {
    let cwd = session.current_directory().to_string();

    let result = match cmd {
        Command::Ls(path) => execute_ls(path, fs, &cwd),
        Command::Cd(path) => execute_cd(path, session, fs),
        Command::Pwd => Ok(CommandResult::line(cwd)),
        Command::Cat(file) => execute_cat(file, fs, &cwd),
        Command::Clear => {
            session.clear_transcript();
            Ok(CommandResult::empty())
        }
        Command::Tree(path) => execute_tree(path, fs, &cwd),
        Command::Echo(text) => Ok(CommandResult::line(text)),
        Command::Grep { pattern, path } => execute_grep(&pattern, path, fs, &cwd),
        Command::Touch(paths) => execute_touch(paths, fs, &cwd),
        Command::Mkdir(paths) => execute_mkdir(paths, fs, &cwd),
        Command::Rm(paths) => execute_rm(paths, fs, &cwd),
        Command::Mv { src, dst } => execute_mv(src, dst, fs, &cwd),
        Command::Cp { src, dst } => execute_cp(src, dst, fs, &cwd),
        Command::Warp(speed) => execute_warp(speed),
        Command::Glitch => Ok(CommandResult::line(messages::GLITCH).with_effect(Effect::Glitch)),
        Command::Void => Ok(CommandResult::line(messages::VOID).with_effect(Effect::Void)),
        Command::Pulse => Ok(CommandResult::line(messages::PULSE).with_effect(Effect::Pulse)),
        Command::Snake => {
            Ok(CommandResult::line(messages::SNAKE_START).with_effect(Effect::Snake))
        }
        Command::Ai(request) => execute_ai(request),
        Command::Margo => Ok(CommandResult::line(messages::MARGO)),
        Command::Help => Ok(CommandResult::output(
            HELP_TEXT.lines().map(str::to_string).collect(),
        )),
        Command::Invalid(err) => Err(err),
        Command::Unknown(name) => Err(CommandError::UnknownCommand(name)),
    };

    result.unwrap_or_else(CommandResult::from)
}

// =============================================================================
// Navigation and Reading
// =============================================================================

/// Execute `ls` command.
fn execute_ls(
    path: Option<PathArg>,
    fs: &VirtualFs,
    cwd: &str,
) -> Result<CommandResult, CommandError> {
    let target = path.as_ref().map(PathArg::as_str).unwrap_or(cwd);
    let resolved = path::resolve(target, cwd);

    let entries = fs
        .lookup(&resolved)
        .ok()
        .and_then(Node::entries)
        .ok_or(CommandError::NotADirectory)?;

    let names: Vec<&str> = entries.keys().map(String::as_str).collect();
    Ok(CommandResult::line(names.join(LS_SEPARATOR)))
}

/// Execute `cd` command.
///
/// `..` pops the last segment of the current directory; any other argument
/// must resolve to a directory. Failure leaves the session untouched.
fn execute_cd(
    path: PathArg,
    session: &mut TerminalSession,
    fs: &VirtualFs,
) -> Result<CommandResult, CommandError> {
    if path == ".." {
        let parent = path::parent_of(session.current_directory());
        session.set_current_directory(parent);
        return Ok(CommandResult::empty());
    }

    let resolved = path::resolve(path.as_str(), session.current_directory());
    if !fs.is_directory(&resolved) {
        return Err(CommandError::NotADirectory);
    }

    let segments = path::segments(&resolved);
    let new_dir = if segments.is_empty() {
        HOME_DIR.to_string()
    } else {
        format!("/{}", segments.join("/"))
    };
    session.set_current_directory(new_dir);
    Ok(CommandResult::empty())
}

/// Execute `cat` command.
fn execute_cat(file: PathArg, fs: &VirtualFs, cwd: &str) -> Result<CommandResult, CommandError> {
    let resolved = path::resolve(file.as_str(), cwd);
    fs.lookup(&resolved)
        .ok()
        .and_then(Node::content)
        .map(CommandResult::line)
        .ok_or(CommandError::FileNotFound)
}

/// Execute `tree` command.
fn execute_tree(
    path: Option<PathArg>,
    fs: &VirtualFs,
    cwd: &str,
) -> Result<CommandResult, CommandError> {
    let target = path.as_ref().map(PathArg::as_str).unwrap_or(cwd);
    let resolved = path::resolve(target, cwd);

    let entries = fs
        .lookup(&resolved)
        .ok()
        .and_then(Node::entries)
        .ok_or(CommandError::NotADirectory)?;

    let header = if target == HOME_DIR {
        HOME_DIR.to_string()
    } else {
        resolved
    };
    let mut lines = vec![header];
    render_tree(entries, "", &mut lines);
    Ok(CommandResult::output(lines))
}

/// Depth-first tree rendering in insertion order.
fn render_tree(entries: &IndexMap<String, Node>, prefix: &str, lines: &mut Vec<String>) {
    let count = entries.len();
    for (index, (name, node)) in entries.iter().enumerate() {
        let is_last = index + 1 == count;
        let connector = if is_last {
            tree::LAST_BRANCH
        } else {
            tree::BRANCH
        };
        lines.push(format!("{}{}{}", prefix, connector, name));

        if let Node::Directory { entries: children } = node {
            let indent = if is_last {
                tree::BLANK_INDENT
            } else {
                tree::PIPE_INDENT
            };
            render_tree(children, &format!("{}{}", prefix, indent), lines);
        }
    }
}

/// Execute `grep` command.
fn execute_grep(
    pattern: &str,
    file: PathArg,
    fs: &VirtualFs,
    cwd: &str,
) -> Result<CommandResult, CommandError> {
    let resolved = path::resolve(file.as_str(), cwd);
    let content = fs
        .lookup(&resolved)
        .ok()
        .and_then(Node::content)
        .ok_or_else(|| {
            CommandError::usage("grep: cannot read file: No such file or directory")
        })?;

    let matches = grep_lines(pattern, content);
    if matches.is_empty() {
        return Ok(CommandResult::line("grep: no matches found"));
    }
    Ok(CommandResult::output(matches))
}

// =============================================================================
// Mutation
// =============================================================================

/// Execute `touch` command. Stops at the first failing operand.
fn execute_touch(
    paths: Vec<PathArg>,
    fs: &mut VirtualFs,
    cwd: &str,
) -> Result<CommandResult, CommandError> {
    for p in paths {
        fs.create_file(&path::resolve(p.as_str(), cwd))
            .map_err(|err| fs_error(format!("touch: cannot touch '{}': {}", p, err)))?;
    }
    Ok(CommandResult::empty())
}

/// Execute `mkdir` command. Stops at the first failing operand.
fn execute_mkdir(
    paths: Vec<PathArg>,
    fs: &mut VirtualFs,
    cwd: &str,
) -> Result<CommandResult, CommandError> {
    for p in paths {
        fs.create_directory(&path::resolve(p.as_str(), cwd))
            .map_err(|err| fs_error(format!("mkdir: cannot create directory '{}': {}", p, err)))?;
    }
    Ok(CommandResult::empty())
}

/// Execute `rm` command. Directories are removed with their contents.
///
/// The current directory and its ancestors cannot be removed.
fn execute_rm(
    paths: Vec<PathArg>,
    fs: &mut VirtualFs,
    cwd: &str,
) -> Result<CommandResult, CommandError> {
    for p in paths {
        let target = path::resolve(p.as_str(), cwd);
        if path::encloses(&target, cwd) {
            return Err(fs_error(format!("rm: cannot remove '{}': {}", p, BUSY)));
        }
        fs.remove(&target)
            .map_err(|err| fs_error(format!("rm: cannot remove '{}': {}", p, err)))?;
    }
    Ok(CommandResult::empty())
}

/// Execute `mv` command.
///
/// The current directory and its ancestors cannot be moved.
fn execute_mv(
    src: PathArg,
    dst: PathArg,
    fs: &mut VirtualFs,
    cwd: &str,
) -> Result<CommandResult, CommandError> {
    let from = path::resolve(src.as_str(), cwd);
    let to = path::resolve(dst.as_str(), cwd);
    if path::encloses(&from, cwd) {
        return Err(fs_error(format!(
            "mv: cannot move '{}' to '{}': {}",
            src, dst, BUSY
        )));
    }

    fs.move_node(&from, &to).map_err(|err| {
        fs_error(match err {
            FsError::NotFound => format!("mv: cannot stat '{}': {}", src, err),
            FsError::IntoItself => format!(
                "mv: cannot move '{}' to a subdirectory of itself, '{}'",
                src, dst
            ),
            other => format!("mv: cannot move '{}' to '{}': {}", src, dst, other),
        })
    })?;
    Ok(CommandResult::empty())
}

/// Execute `cp` command. Only files can be copied.
fn execute_cp(
    src: PathArg,
    dst: PathArg,
    fs: &mut VirtualFs,
    cwd: &str,
) -> Result<CommandResult, CommandError> {
    let from = path::resolve(src.as_str(), cwd);
    let to = path::resolve(dst.as_str(), cwd);

    fs.copy_file(&from, &to).map_err(|err| {
        fs_error(match err {
            FsError::NotFound => format!("cp: cannot stat '{}': {}", src, err),
            FsError::IsADirectory => {
                format!("cp: -r not specified; omitting directory '{}'", src)
            }
            FsError::AlreadyExists => format!(
                "cp: cannot overwrite directory '{}' with non-directory",
                dst
            ),
            other => format!("cp: cannot create regular file '{}': {}", dst, other),
        })
    })?;
    Ok(CommandResult::empty())
}

/// Reason given when an operand holds the current directory.
const BUSY: &str = "Device or resource busy";

fn fs_error(msg: String) -> CommandError {
    CommandError::Fs(msg)
}

// =============================================================================
// Effects
// =============================================================================

/// Execute `warp` command. Accepts speeds in `(0, 10]`.
fn execute_warp(speed: Option<String>) -> Result<CommandResult, CommandError> {
    let speed = speed
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|s| s.is_finite() && *s > warp::MIN_SPEED && *s <= warp::MAX_SPEED)
        .ok_or_else(|| CommandError::usage(messages::WARP_USAGE))?;

    Ok(CommandResult::line(format!("Warp speed set to {}", speed)).with_effect(Effect::Warp(speed)))
}

/// Execute `ai` command. The reply arrives later through the session.
fn execute_ai(request: Option<AiRequest>) -> Result<CommandResult, CommandError> {
    match request {
        Some(AiRequest::Init) => Ok(CommandResult::empty().with_effect(Effect::AiInit)),
        Some(AiRequest::Chat(message)) => {
            Ok(CommandResult::empty().with_effect(Effect::AiChat(message)))
        }
        None => Err(CommandError::usage(messages::AI_USAGE)),
    }
}
