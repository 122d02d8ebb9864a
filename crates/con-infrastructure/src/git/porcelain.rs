//! Parsers for git's machine-readable output.

use con_core::git::{BranchInfo, BranchList, GitStatus, RenamedPath};

const CONFLICT_CODES: [&str; 7] = ["DD", "AU", "UD", "UA", "DU", "AA", "UU"];

/// Parses `git status --porcelain=v1 --branch -z`.
pub fn parse_status(output: &str) -> GitStatus {
    let mut status = GitStatus::default();
    let mut tokens = output.split('\0').filter(|t| !t.is_empty());

    while let Some(entry) = tokens.next() {
        if let Some(header) = entry.strip_prefix("## ") {
            parse_branch_header(header, &mut status);
            continue;
        }
        if entry.len() < 4 {
            continue;
        }

        let (code, path) = entry.split_at(2);
        let path = path[1..].to_string();
        let mut chars = code.chars();
        let index = chars.next().unwrap_or(' ');
        let worktree = chars.next().unwrap_or(' ');

        if code == "??" {
            status.untracked_paths.push(path);
            continue;
        }
        if code == "!!" {
            continue;
        }
        if CONFLICT_CODES.contains(&code) {
            status.conflicted_paths.push(path);
            continue;
        }

        if index == 'R' || index == 'C' {
            // With -z the source path follows as its own token.
            let from = tokens.next().unwrap_or_default().to_string();
            if index == 'R' {
                status.renamed_paths.push(RenamedPath {
                    from,
                    to: path.clone(),
                });
            } else {
                status.created_paths.push(path.clone());
            }
        }
        if index != ' ' && index != '?' {
            status.staged_paths.push(path.clone());
        }
        if index == 'M' || worktree == 'M' {
            status.modified_paths.push(path.clone());
        }
        if index == 'A' || worktree == 'A' {
            status.created_paths.push(path.clone());
        }
        if index == 'D' || worktree == 'D' {
            status.deleted_paths.push(path);
        }
    }

    status.refresh_clean_flag();
    status
}

fn parse_branch_header(header: &str, status: &mut GitStatus) {
    if let Some(branch) = header
        .strip_prefix("No commits yet on ")
        .or_else(|| header.strip_prefix("Initial commit on "))
    {
        status.current_branch = Some(branch.trim().to_string());
        return;
    }
    if header.starts_with("HEAD (no branch)") {
        return;
    }

    let (refs, counts) = match header.find(" [") {
        Some(pos) => (&header[..pos], Some(header[pos + 2..].trim_end_matches(']'))),
        None => (header, None),
    };

    match refs.split_once("...") {
        Some((local, remote)) => {
            status.current_branch = Some(local.to_string());
            status.tracking = Some(remote.to_string());
        }
        None => status.current_branch = Some(refs.trim().to_string()),
    }

    for part in counts.into_iter().flat_map(|c| c.split(", ")) {
        if let Some(n) = part.strip_prefix("ahead ") {
            status.ahead_count = n.trim().parse().unwrap_or(0);
        } else if let Some(n) = part.strip_prefix("behind ") {
            status.behind_count = n.trim().parse().unwrap_or(0);
        }
    }
}

/// Format string for `git for-each-ref` matching [`parse_branches`].
pub const BRANCH_FORMAT: &str = "%(refname:short)%00%(objectname:short)%00%(HEAD)%00%(contents:subject)";

/// Parses `git for-each-ref --format=<BRANCH_FORMAT> refs/heads`.
pub fn parse_branches(output: &str) -> BranchList {
    let mut list = BranchList::default();

    for line in output.lines() {
        let mut fields = line.split('\0');
        let Some(name) = fields.next().filter(|n| !n.is_empty()) else {
            continue;
        };
        let commit_hash = fields.next().unwrap_or_default().to_string();
        let is_current = fields.next().is_some_and(|h| h.trim() == "*");
        let label = fields.next().unwrap_or_default().to_string();

        if is_current {
            list.current = name.to_string();
        }
        list.all.push(name.to_string());
        list.branches.push(BranchInfo {
            name: name.to_string(),
            is_current,
            commit_hash,
            label,
        });
    }

    list
}
