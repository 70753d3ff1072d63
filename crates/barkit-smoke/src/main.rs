//! BarKit Smoke Harness
//!
//! Builds a button bar of text labels, lays it out at the requested size,
//! paints it into a display list and prints the outcome as one JSON line.
//!
//! ```bash
//! barkit-smoke --width 240 --labels "Cancel,Save draft,Send"
//! barkit-smoke --width 180 --height 60 --overflow-up --spacing 4 --log-json
//! barkit-smoke --theme bar-theme.json --direction rtl
//! ```

use barkit_common::{init_logging, CommonError, LogConfig, LogFormat};
use barkit_layout::{
    BoxConstraints, ButtonBar, DisplayList, LayoutMode, Offset, RenderBox, TextBox,
};
use barkit_theme::{
    BarThemeData, ConfigError, MainAxisAlignment, TextDirection, VerticalDirection,
};
use serde_json::{json, Value};
use std::process::ExitCode;
use thiserror::Error;
use tracing::{debug, error, info};

const LABEL_FONT_SIZE: f32 = 14.0;

#[derive(Error, Debug)]
enum SmokeError {
    #[error("Invalid argument {flag}: {reason}")]
    Args { flag: &'static str, reason: String },

    #[error("Failed to read theme file {path}: {source}")]
    ThemeFile {
        path: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Logging(#[from] CommonError),
}

/// Parse command line arguments
#[derive(Debug)]
struct Args {
    width: f32,
    height: Option<f32>,
    alignment: Option<MainAxisAlignment>,
    direction: TextDirection,
    overflow_up: bool,
    spacing: Option<f32>,
    labels: Vec<String>,
    theme_file: Option<String>,
    log_json: bool,
}

impl Args {
    fn parse() -> Result<Self, SmokeError> {
        Self::parse_from(std::env::args().skip(1))
    }

    fn parse_from(args: impl IntoIterator<Item = String>) -> Result<Self, SmokeError> {
        let mut args = args.into_iter();
        let mut parsed = Self {
            width: 400.0,
            height: None,
            alignment: None,
            direction: TextDirection::Ltr,
            overflow_up: false,
            spacing: None,
            labels: vec!["Cancel".to_string(), "OK".to_string()],
            theme_file: None,
            log_json: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--width" => parsed.width = parse_length("--width", args.next())?,
                "--height" => parsed.height = Some(parse_length("--height", args.next())?),
                "--spacing" => parsed.spacing = Some(parse_length("--spacing", args.next())?),
                "--alignment" => {
                    parsed.alignment = Some(parse_keyword("--alignment", args.next())?);
                }
                "--direction" => parsed.direction = parse_keyword("--direction", args.next())?,
                "--overflow-up" => parsed.overflow_up = true,
                "--labels" => {
                    let value = required("--labels", args.next())?;
                    parsed.labels = value
                        .split(',')
                        .map(str::trim)
                        .filter(|label| !label.is_empty())
                        .map(str::to_string)
                        .collect();
                }
                "--theme" => parsed.theme_file = Some(required("--theme", args.next())?),
                "--log-json" => parsed.log_json = true,
                other => {
                    return Err(SmokeError::Args {
                        flag: "argument",
                        reason: format!("unknown flag '{other}'"),
                    })
                }
            }
        }

        Ok(parsed)
    }

    /// Theme values given on the command line, layered over the theme file.
    fn explicit_theme(&self) -> BarThemeData {
        BarThemeData {
            alignment: self.alignment,
            overflow_direction: self.overflow_up.then_some(VerticalDirection::Up),
            overflow_button_spacing: self.spacing,
            ..Default::default()
        }
    }

    fn ambient_theme(&self) -> Result<BarThemeData, SmokeError> {
        let Some(path) = &self.theme_file else {
            return Ok(BarThemeData::default());
        };
        let json = std::fs::read_to_string(path).map_err(|source| SmokeError::ThemeFile {
            path: path.clone(),
            source,
        })?;
        Ok(BarThemeData::from_json(&json)?)
    }
}

fn required(flag: &'static str, value: Option<String>) -> Result<String, SmokeError> {
    value.ok_or_else(|| SmokeError::Args {
        flag,
        reason: "missing value".to_string(),
    })
}

fn parse_length(flag: &'static str, value: Option<String>) -> Result<f32, SmokeError> {
    let value = required(flag, value)?;
    value.parse::<f32>().map_err(|e| SmokeError::Args {
        flag,
        reason: format!("'{value}': {e}"),
    })
}

/// Parse a camelCase keyword the same way theme files spell it.
fn parse_keyword<T: serde::de::DeserializeOwned>(
    flag: &'static str,
    value: Option<String>,
) -> Result<T, SmokeError> {
    let value = required(flag, value)?;
    serde_json::from_value(Value::String(value.clone())).map_err(|e| SmokeError::Args {
        flag,
        reason: format!("'{value}': {e}"),
    })
}

fn run(args: &Args) -> Result<Value, SmokeError> {
    let children: Vec<Box<dyn RenderBox>> = args
        .labels
        .iter()
        .map(|label| Box::new(TextBox::new(label.as_str(), LABEL_FONT_SIZE)) as Box<dyn RenderBox>)
        .collect();

    let ambient = args.ambient_theme()?;
    let mut bar = ButtonBar::new(&args.explicit_theme(), &ambient, args.direction, children)?;
    debug!(config = ?bar.config(), "bar configured");

    let constraints = BoxConstraints::loose(args.width, args.height.unwrap_or(f32::INFINITY));
    let size = bar.layout(constraints);

    let mut list = DisplayList::new();
    bar.paint(&mut list, Offset::ZERO);

    let mode = match bar.layout_mode() {
        Some(LayoutMode::Row) => "row",
        Some(LayoutMode::Column) => "column",
        None => "none",
    };
    let origin = bar.row_offset();
    let children: Vec<Value> = bar
        .row()
        .children()
        .iter()
        .zip(&args.labels)
        .map(|(child, label)| {
            let rect = child.rect().shift(origin);
            json!({
                "label": label,
                "x": rect.x,
                "y": rect.y,
                "width": rect.width,
                "height": rect.height,
            })
        })
        .collect();

    info!(
        mode,
        width = size.width,
        height = size.height,
        overflow = bar.overflow(),
        commands = list.len(),
        "bar laid out"
    );

    Ok(json!({
        "status": "pass",
        "mode": mode,
        "size": { "width": size.width, "height": size.height },
        "overflow": bar.overflow(),
        "children": children,
        "commands": list.len(),
    }))
}

fn main() -> ExitCode {
    let args = match Args::parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };

    let log_config = LogConfig {
        format: if args.log_json {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        },
        ..LogConfig::default()
    };
    if let Err(e) = init_logging(&log_config) {
        eprintln!("{}", SmokeError::from(e));
        return ExitCode::FAILURE;
    }

    info!(
        width = args.width,
        height = ?args.height,
        labels = args.labels.len(),
        theme_file = ?args.theme_file,
        "Starting BarKit Smoke Harness"
    );

    match run(&args) {
        Ok(result) => {
            println!("{}", result);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "smoke run failed");
            println!("{}", json!({ "status": "fail", "reason": e.to_string() }));
            ExitCode::FAILURE
        }
    }
}
