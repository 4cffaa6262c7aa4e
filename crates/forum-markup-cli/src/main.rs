mod app;
mod ui;

use anyhow::{Context, Result, bail};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use forum_markup_config::{Config, ConfigError, OutputFormat};
use forum_markup_engine::{
    editing::DEFAULT_LINK_PLACEHOLDER,
    render::{to_html, to_outline},
    render_post,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    env,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};

use app::{App, Control};

const USAGE: &str = "Usage:\n  forum-markup-cli [draft-file]\n  forum-markup-cli render <file> [--format html|outline]";

#[derive(Debug, PartialEq, Eq)]
enum Mode {
    Render {
        file: PathBuf,
        format: Option<OutputFormat>,
    },
    Compose {
        file: Option<PathBuf>,
    },
}

fn parse_args(args: &[String]) -> Result<Mode> {
    match args {
        [] => Ok(Mode::Compose { file: None }),
        [cmd, rest @ ..] if cmd == "render" => match rest {
            [file] => Ok(Mode::Render {
                file: PathBuf::from(file),
                format: None,
            }),
            [file, flag, format] if flag == "--format" => Ok(Mode::Render {
                file: PathBuf::from(file),
                format: Some(format.parse()?),
            }),
            _ => bail!("invalid render arguments\n{USAGE}"),
        },
        [file] => Ok(Mode::Compose {
            file: Some(PathBuf::from(file)),
        }),
        _ => bail!("too many arguments\n{USAGE}"),
    }
}

fn render_file(file: &Path, format: OutputFormat) -> Result<String> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;
    let post = render_post(&text);
    Ok(match format {
        OutputFormat::Html => to_html(&post),
        OutputFormat::Outline => to_outline(&post),
    })
}

/// Picks the render format: the `--format` flag, else the config default, else
/// HTML. The config is only read when no flag was given.
fn resolve_format<F>(flag: Option<OutputFormat>, load_config: F) -> Result<OutputFormat, ConfigError>
where
    F: FnOnce() -> Result<Option<Config>, ConfigError>,
{
    if let Some(format) = flag {
        return Ok(format);
    }
    Ok(load_config()?.map(|c| c.default_format).unwrap_or_default())
}

fn load_config_or_exit() -> Option<Config> {
    match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let mode = match parse_args(&args) {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    match mode {
        Mode::Render { file, format } => {
            let format = match resolve_format(format, Config::load) {
                Ok(format) => format,
                Err(e) => {
                    eprintln!("Error: Failed to load config file: {e}");
                    process::exit(1);
                }
            };
            println!("{}", render_file(&file, format)?);
            Ok(())
        }
        Mode::Compose { file } => {
            let config = load_config_or_exit();
            let file = match (file, &config) {
                (Some(file), _) => file,
                (None, Some(config)) => config.draft_file(),
                (None, None) => {
                    eprintln!("Error: No draft file provided and no config file found");
                    eprintln!("{USAGE}");
                    eprintln!("Or create a config file at {}", Config::config_path().display());
                    process::exit(1);
                }
            };
            let placeholder = config
                .as_ref()
                .map(|c| c.link_placeholder.as_str())
                .unwrap_or(DEFAULT_LINK_PLACEHOLDER);
            log::info!("composing {}", file.display());
            compose(App::open(file, placeholder)?)
        }
    }
}

fn compose(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if app.is_dirty() {
        log::warn!("quit with unsaved changes");
    }
    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()?
            && app.handle_key(key)? == Control::Quit
        {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments_composes_from_config() {
        assert_eq!(parse_args(&[]).unwrap(), Mode::Compose { file: None });
    }

    #[test]
    fn single_argument_is_draft_file() {
        assert_eq!(
            parse_args(&args(&["post.md"])).unwrap(),
            Mode::Compose {
                file: Some(PathBuf::from("post.md"))
            }
        );
    }

    #[test]
    fn render_with_format() {
        assert_eq!(
            parse_args(&args(&["render", "post.md", "--format", "outline"])).unwrap(),
            Mode::Render {
                file: PathBuf::from("post.md"),
                format: Some(OutputFormat::Outline),
            }
        );
    }

    #[test]
    fn render_rejects_unknown_format() {
        let err = parse_args(&args(&["render", "post.md", "--format", "pdf"])).unwrap_err();
        assert!(err.to_string().contains("pdf"));
    }

    #[test]
    fn render_requires_file() {
        assert!(parse_args(&args(&["render"])).is_err());
    }

    #[test]
    fn render_file_as_html() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("post.md");
        std::fs::write(&path, "### Hi\n**there**").unwrap();

        assert_eq!(
            render_file(&path, OutputFormat::Html).unwrap(),
            "<h3>Hi</h3>\n<p><strong>there</strong></p>"
        );
    }

    #[test]
    fn explicit_format_skips_broken_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "drafts_path = [unclosed").unwrap();

        let format =
            resolve_format(Some(OutputFormat::Html), || Config::load_from_path(&path)).unwrap();
        assert_eq!(format, OutputFormat::Html);
        assert!(resolve_format(None, || Config::load_from_path(&path)).is_err());
    }

    #[test]
    fn format_falls_back_to_config_then_html() {
        let mut config = Config::new(PathBuf::from("/tmp/drafts"));
        config.default_format = OutputFormat::Outline;
        assert_eq!(
            resolve_format(None, || Ok(Some(config))).unwrap(),
            OutputFormat::Outline
        );
        assert_eq!(resolve_format(None, || Ok(None)).unwrap(), OutputFormat::Html);
    }

    #[test]
    fn config_placeholder_default_matches_engine() {
        let config = Config::new(PathBuf::from("/tmp/drafts"));
        assert_eq!(config.link_placeholder, DEFAULT_LINK_PLACEHOLDER);
    }

    #[test]
    fn render_missing_file_has_context() {
        let dir = TempDir::new().unwrap();
        let err = render_file(&dir.path().join("nope.md"), OutputFormat::Outline).unwrap_err();
        assert!(err.to_string().contains("nope.md"));
    }
}
