// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Thalassa CLI entrypoint.
//!
//! Runs the interactive demo over a candidate catalog. Without a catalog file
//! (or with `--demo`), a built-in candidate list is used.

use std::error::Error;
use std::str::FromStr;

use thalassa::model::{Alphabet, FollowMode};

const DEFAULT_HINT_CHARS: &str = "0123456789";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<candidates.json>] [--hint-chars <chars>] [--mode <mode>]\n  {program} [--candidates <file>] [--hint-chars <chars>] [--mode <mode>]\n  {program} --demo [--hint-chars <chars>] [--mode <mode>]\n\nIf candidates.json/--candidates is omitted, a built-in demo candidate list is used.\n--demo makes that explicit and cannot be combined with a catalog file.\n\n--hint-chars sets the ordered hint alphabet (default {DEFAULT_HINT_CHARS}).\n--mode selects what a resolution does: click, newwindow, or returnuri (default click)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    candidates_path: Option<String>,
    hint_chars: Option<String>,
    mode: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--candidates" => {
                if options.candidates_path.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.candidates_path = Some(path);
            }
            "--hint-chars" => {
                if options.hint_chars.is_some() {
                    return Err(());
                }
                let chars = args.next().ok_or(())?;
                options.hint_chars = Some(chars);
            }
            "--mode" => {
                if options.mode.is_some() {
                    return Err(());
                }
                let mode = args.next().ok_or(())?;
                options.mode = Some(mode);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.candidates_path.is_some() {
                    return Err(());
                }
                options.candidates_path = Some(arg);
            }
        }
    }

    if options.demo && options.candidates_path.is_some() {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "thalassa".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let hint_chars = options.hint_chars.as_deref().unwrap_or(DEFAULT_HINT_CHARS);
        let alphabet = Alphabet::from_str(hint_chars)?;

        let mode = match options.mode.as_deref() {
            Some(raw) => FollowMode::from_str(raw)?,
            None => FollowMode::default(),
        };

        let candidates = match options.candidates_path.as_deref() {
            Some(path) => thalassa::catalog::load_candidates(path)?,
            None => thalassa::tui::demo_candidates(),
        };

        thalassa::tui::run(candidates, alphabet, mode)
    })();

    if let Err(err) = result {
        eprintln!("thalassa: {err}");
        std::process::exit(1);
    }
}
