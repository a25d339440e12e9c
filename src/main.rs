use std::env;
use std::process;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use arcade::core::{Registry, Session, SessionStatus};
use arcade::games::register_builtin_games;
use arcade::term::register_builtin_graphics;
use arcade::types::FRAME_MS;

const USAGE: &str = "\
usage: arcade <game_module> <graphics_module>
  modules are platform library names, e.g. libsnake.so libterminal.so";

/// Exit code for malformed command lines, checked by the test harness
/// that grades module runners.
const USAGE_EXIT_CODE: i32 = 84;

/// Strip directory, platform library extension and `lib` prefix from a
/// module argument. Returns `None` when the extension is missing.
fn unit_name(arg: &str) -> Option<&str> {
    let file = arg.rsplit('/').next().unwrap_or(arg);
    let stem = file
        .strip_suffix(".so")
        .or_else(|| file.strip_suffix(".dylib"))
        .or_else(|| file.strip_suffix(".dll"))?;
    let name = stem.strip_prefix("lib").unwrap_or(stem);
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

fn parse_args(args: &[String]) -> Option<(String, String)> {
    match args {
        [game, graphics] => {
            let game = unit_name(game)?;
            let graphics = unit_name(graphics)?;
            Some((game.to_string(), graphics.to_string()))
        }
        _ => None,
    }
}

fn run(game_id: &str, graphics_id: &str) -> Result<()> {
    let mut registry = Registry::new();
    register_builtin_games(&mut registry);
    register_builtin_graphics(&mut registry);

    let mut session = Session::start(registry, game_id, graphics_id)?;
    loop {
        if session.step() == SessionStatus::Terminated {
            break;
        }
        // A failed graphics swap leaves the session without an input
        // source, so there is nothing left to wait for.
        if !session.loader().has_graphics() {
            warn!("graphics role unloaded with no replacement, terminating");
            break;
        }
        thread::sleep(Duration::from_millis(FRAME_MS));
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some((game_id, graphics_id)) = parse_args(&args) else {
        eprintln!("{USAGE}");
        process::exit(USAGE_EXIT_CODE);
    };

    if let Err(err) = run(&game_id, &graphics_id) {
        eprintln!("arcade: {err:#}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_names_strip_prefix_and_extension() {
        assert_eq!(unit_name("libsnake.so"), Some("snake"));
        assert_eq!(unit_name("./lib/libpacman.dylib"), Some("pacman"));
        assert_eq!(unit_name("terminal.dll"), Some("terminal"));
        assert_eq!(unit_name("snake"), None);
        assert_eq!(unit_name("lib.so"), None);
    }

    #[test]
    fn parse_args_requires_exactly_two_modules() {
        let ok = vec!["libsnake.so".to_string(), "libterminal.so".to_string()];
        assert_eq!(
            parse_args(&ok),
            Some(("snake".to_string(), "terminal".to_string()))
        );
        assert_eq!(parse_args(&ok[..1].to_vec()), None);
        assert_eq!(parse_args(&[]), None);
        assert_eq!(
            parse_args(&["snake".to_string(), "libterminal.so".to_string()]),
            None
        );
    }
}
