use crate::error::DemoError;
use crate::lessons::{DEFAULT_TIMESTAMP_FORMAT, Lesson};
use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use serde::Deserialize;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;

const DEFAULT_PERSON_NAME: &str = "Alice";
const DEFAULT_CAR_MODEL: &str = "Tesla";
const DEFAULT_ADDENDS: (i32, i32) = (5, 3);
const DEFAULT_STUDENT_NAME: &str = "John";
const DEFAULT_SECRET_NUMBER: i32 = 42;
const DEFAULT_COUNTER_INSTANCES: u32 = 2;

/// Literal values fed to each lesson.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoInputs {
    pub person_name: String,
    pub car_model: String,
    pub addends: (i32, i32),
    pub student_name: String,
    pub secret_number: i32,
    pub counter_instances: u32,
}

impl Default for DemoInputs {
    fn default() -> Self {
        Self {
            person_name: DEFAULT_PERSON_NAME.to_string(),
            car_model: DEFAULT_CAR_MODEL.to_string(),
            addends: DEFAULT_ADDENDS,
            student_name: DEFAULT_STUDENT_NAME.to_string(),
            secret_number: DEFAULT_SECRET_NUMBER,
            counter_instances: DEFAULT_COUNTER_INSTANCES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Lessons to run, sorted into canonical order and deduplicated.
    pub lessons: Vec<Lesson>,
    pub timestamp_format: String,
    pub inputs: DemoInputs,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            lessons: Lesson::iter().collect(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            inputs: DemoInputs::default(),
        }
    }
}

impl DemoConfig {
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let CliArgs {
            config,
            lessons: cli_lessons,
            timestamp_format: cli_timestamp_format,
            person_name: cli_person_name,
            car_model: cli_car_model,
            addends: cli_addends,
            student_name: cli_student_name,
            secret_number: cli_secret_number,
            counter_instances: cli_counter_instances,
        } = args;

        let file_config = if let Some(path) = config.as_ref() {
            load_config_file(path)?
        } else {
            PartialConfig::default()
        };

        let PartialConfig {
            lessons: file_lessons,
            timestamp_format: file_timestamp_format,
            inputs: file_inputs,
        } = file_config;
        let file_inputs = file_inputs.unwrap_or_default();

        let mut lessons = cli_lessons
            .or(file_lessons)
            .unwrap_or_else(|| Lesson::iter().collect());
        lessons.sort();
        lessons.dedup();

        let timestamp_format = cli_timestamp_format
            .or(file_timestamp_format)
            .unwrap_or_else(|| DEFAULT_TIMESTAMP_FORMAT.to_string());

        let addends = match cli_addends {
            Some(values) => {
                anyhow::ensure!(
                    values.len() == 2,
                    "--addends expects exactly two integers, got {}",
                    values.len()
                );
                Some((values[0], values[1]))
            }
            None => file_inputs.addends,
        };

        let defaults = DemoInputs::default();
        let inputs = DemoInputs {
            person_name: cli_person_name
                .or(file_inputs.person_name)
                .unwrap_or(defaults.person_name),
            car_model: cli_car_model
                .or(file_inputs.car_model)
                .unwrap_or(defaults.car_model),
            addends: addends.unwrap_or(defaults.addends),
            student_name: cli_student_name
                .or(file_inputs.student_name)
                .unwrap_or(defaults.student_name),
            secret_number: cli_secret_number
                .or(file_inputs.secret_number)
                .unwrap_or(defaults.secret_number),
            counter_instances: cli_counter_instances
                .or(file_inputs.counter_instances)
                .unwrap_or(defaults.counter_instances),
        };

        Ok(Self {
            lessons,
            timestamp_format,
            inputs,
        })
    }

    /// Checks the assembled config before anything is printed.
    pub fn validate(&self) -> Result<(), DemoError> {
        if self.lessons.is_empty() {
            return Err(DemoError::EmptyLessonSelection);
        }
        validate_timestamp_format(&self.timestamp_format)
    }

    pub fn runs(&self, lesson: Lesson) -> bool {
        self.lessons.contains(&lesson)
    }
}

/// Renders the current time once so that specifiers chrono only accepts for
/// parsing (such as `%#z`) are rejected here rather than mid-output.
fn validate_timestamp_format(format: &str) -> Result<(), DemoError> {
    let mut sample = String::new();
    let broken = format.is_empty() || write!(sample, "{}", Local::now().format(format)).is_err();
    if broken {
        return Err(DemoError::InvalidTimestampFormat {
            format: format.to_string(),
        });
    }
    Ok(())
}

#[derive(Parser, Debug, Default, Clone)]
#[command(
    name = "oop-basics",
    about = "Walks through basic object-oriented ideas, one small type at a time",
    version
)]
pub struct CliArgs {
    #[arg(
        long,
        value_name = "FILE",
        help = "Path to a configuration file (YAML or JSON)"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        env = "OOP_BASICS_LESSONS",
        value_enum,
        value_name = "LESSON",
        value_delimiter = ',',
        help = "Comma-separated list of lessons to run"
    )]
    pub lessons: Option<Vec<Lesson>>,

    #[arg(
        long,
        env = "OOP_BASICS_TIMESTAMP_FORMAT",
        value_name = "FMT",
        help = "strftime format used to print the construction timestamp"
    )]
    pub timestamp_format: Option<String>,

    #[arg(long, value_name = "NAME", help = "Name the person introduces")]
    pub person_name: Option<String>,

    #[arg(long, value_name = "MODEL", help = "Model assigned to the car")]
    pub car_model: Option<String>,

    #[arg(
        long,
        value_name = "A,B",
        value_delimiter = ',',
        allow_negative_numbers = true,
        help = "Two integers for the calculator to add"
    )]
    pub addends: Option<Vec<i32>>,

    #[arg(long, value_name = "NAME", help = "Name given to the student")]
    pub student_name: Option<String>,

    #[arg(
        long,
        value_name = "N",
        allow_negative_numbers = true,
        help = "Number hidden inside the example"
    )]
    pub secret_number: Option<i32>,

    #[arg(
        long,
        value_name = "N",
        help = "How many counters to construct",
        value_parser = clap::value_parser!(u32)
    )]
    pub counter_instances: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    lessons: Option<Vec<Lesson>>,
    timestamp_format: Option<String>,
    inputs: Option<PartialInputs>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialInputs {
    person_name: Option<String>,
    car_model: Option<String>,
    addends: Option<(i32, i32)>,
    student_name: Option<String>,
    secret_number: Option<i32>,
    counter_instances: Option<u32>,
}

fn load_config_file(path: &Path) -> Result<PartialConfig> {
    if !path.exists() {
        anyhow::bail!("config file {:?} does not exist", path);
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {:?}", path))?;
    let ext = path
        .extension()
        .and_then(|os| os.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse YAML config {:?}", path))?,
        "json" => serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse JSON config {:?}", path))?,
        other => return Err(DemoError::UnsupportedConfigExtension(other.to_string()).into()),
    };
    Ok(parsed)
}
