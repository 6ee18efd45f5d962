use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};

use assessment_wheel::error::AppError;
use assessment_wheel::events::{EventOutcome, apply_event, parse_event};
use assessment_wheel::export::{ExportError, Exporter, SvgExporter, SvgzExporter};
use assessment_wheel::model::{Competency, GradeRank, HoverPointer, Session};
use assessment_wheel::render::svg::{render_legend_svg, render_wheel_svg};
use assessment_wheel::render::{WHEEL_CENTER, WheelGeometry};
use assessment_wheel::report::write_reports;
use assessment_wheel::rubric::{QualificationLevel, Rubric};

#[derive(Parser, Debug)]
#[command(
    name = "assessment-wheel",
    about = "Grade five creative-thinking competencies and render the assessment wheel",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a session from flags and write the reports
    Render(RenderArgs),
    /// Replay an event script against a fresh session
    Play(PlayArgs),
    /// Write the origin-centered legend wheel
    Legend {
        /// Output file; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the rubric description for one cell
    Rubric {
        #[arg(long, default_value = "5")]
        level: QualificationLevel,
        competency: Competency,
        grade: Option<GradeRank>,
    },
}

#[derive(Args, Debug)]
struct GradeArgs {
    #[arg(long, value_name = "GRADE")]
    research: Option<GradeRank>,
    #[arg(long, value_name = "GRADE")]
    concepts: Option<GradeRank>,
    #[arg(long = "fail-fix", value_name = "GRADE")]
    fail_fix: Option<GradeRank>,
    #[arg(long, value_name = "GRADE")]
    communicate: Option<GradeRank>,
    #[arg(long, value_name = "GRADE")]
    evaluate: Option<GradeRank>,
}

impl GradeArgs {
    fn grades(&self) -> [(Competency, Option<GradeRank>); 5] {
        [
            (Competency::Research, self.research),
            (Competency::Concepts, self.concepts),
            (Competency::FailFix, self.fail_fix),
            (Competency::Communicate, self.communicate),
            (Competency::Evaluate, self.evaluate),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum WheelFormat {
    Svg,
    Svgz,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Directory for summary.json, report.txt and the wheel artifact
    #[arg(long, default_value = ".")]
    out: PathBuf,
    #[arg(long, value_enum, default_value_t = WheelFormat::Svg)]
    format: WheelFormat,
    /// Write the JSON and text reports even when some competencies are unassessed
    #[arg(long)]
    force: bool,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    grades: GradeArgs,
    /// Hover preview as <competency>:<grade>
    #[arg(long)]
    hover: Option<HoverPointer>,
    #[arg(long, default_value = "5")]
    level: QualificationLevel,
    #[arg(long, default_value = "")]
    student: String,
    #[arg(long, default_value = "")]
    project: String,
    #[arg(long, default_value = "")]
    feedback: String,
    /// Print the live wheel SVG, hover included, to stdout instead of writing reports
    #[arg(long)]
    preview: bool,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct PlayArgs {
    /// Event script path, or `-` for stdin
    script: PathBuf,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Debug, Clone)]
struct RunConfig {
    out_dir: PathBuf,
    format: WheelFormat,
    allow_incomplete: bool,
}

impl RunConfig {
    fn from_output(output: &OutputArgs) -> Self {
        Self {
            out_dir: output.out.clone(),
            format: output.format,
            allow_incomplete: output.force,
        }
    }

    fn exporter(&self) -> Box<dyn Exporter> {
        match self.format {
            WheelFormat::Svg => Box::new(SvgExporter),
            WheelFormat::Svgz => Box::new(SvgzExporter::default()),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    assessment_wheel::logging::init_logging(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let rubric = Rubric::builtin();
    rubric.validate()?;

    match cli.command {
        Command::Render(args) => run_render(&args, &rubric),
        Command::Play(args) => run_play(&args, &rubric),
        Command::Legend { out } => run_legend(out.as_deref()),
        Command::Rubric {
            level,
            competency,
            grade,
        } => {
            println!("{}", rubric.lookup(level, competency, grade));
            Ok(())
        }
    }
}

fn session_from_args(args: &RenderArgs) -> Session {
    let mut session = Session::new();
    session.set_level(args.level);
    session.set_student_name(&args.student);
    session.set_project_name(&args.project);
    session.set_feedback(&args.feedback);
    for (competency, grade) in args.grades.grades() {
        if let Some(grade) = grade {
            session.activate_segment(competency, grade);
        }
    }
    if let Some(hover) = args.hover {
        if !session.hover_enter(hover.competency, hover.rank) {
            tracing::warn!(
                competency = %hover.competency,
                grade = %hover.rank,
                "hover ignored; ring already filled"
            );
        }
    }
    session
}

fn run_render(args: &RenderArgs, rubric: &Rubric) -> Result<(), AppError> {
    let session = session_from_args(args);
    let geometry = WheelGeometry::new(WHEEL_CENTER);
    tracing::info!(
        assessed = session.state().assessed_count(),
        level = session.level().short_label(),
        "rendering assessment"
    );

    if args.preview {
        print!(
            "{}",
            render_wheel_svg(&geometry.draws(session.state()), &geometry.ring_labels())
        );
        return Ok(());
    }

    let config = RunConfig::from_output(&args.output);
    export_reports(&session, rubric, &geometry, &config)
}

fn export_reports(
    session: &Session,
    rubric: &Rubric,
    geometry: &WheelGeometry,
    config: &RunConfig,
) -> Result<(), AppError> {
    let exporter = config.exporter();
    let written = write_reports(
        session,
        rubric,
        geometry,
        exporter.as_ref(),
        &config.out_dir,
        config.allow_incomplete,
    )
    .inspect_err(|err| {
        if let ExportError::NotFullyAssessed { missing } = err {
            tracing::warn!(
                unassessed = missing.len(),
                "export refused; pass --force to write partial reports"
            );
        }
    })?;
    if let Some(wheel) = &written.wheel {
        println!("{}", wheel.display());
    }
    Ok(())
}

fn open_script(path: &Path) -> Result<Box<dyn BufRead>, AppError> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(BufReader::new(std::io::stdin())));
    }
    let file = std::fs::File::open(path).map_err(|source| AppError::ScriptIo {
        path: path.display().to_string(),
        source,
    })?;
    Ok(Box::new(BufReader::new(file)))
}

/// Replays the script; every `export` line writes reports at that point. A
/// script without one exports once after the last line.
fn run_play(args: &PlayArgs, rubric: &Rubric) -> Result<(), AppError> {
    let config = RunConfig::from_output(&args.output);
    let geometry = WheelGeometry::new(WHEEL_CENTER);
    let mut session = Session::new();
    let mut exports = 0usize;

    let reader = open_script(&args.script)?;
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| AppError::ScriptIo {
            path: args.script.display().to_string(),
            source,
        })?;
        let Some(event) = parse_event(&line).map_err(|source| AppError::Script {
            line: line_no,
            source,
        })?
        else {
            continue;
        };

        tracing::debug!(line = line_no, ?event, "apply");
        match apply_event(&mut session, &event) {
            EventOutcome::Applied => {}
            EventOutcome::HoverIgnored => {
                tracing::warn!(line = line_no, "hover ignored; ring already filled");
            }
            EventOutcome::ExportRequested => {
                export_reports(&session, rubric, &geometry, &config)?;
                exports += 1;
            }
        }
    }

    if exports == 0 {
        export_reports(&session, rubric, &geometry, &config)?;
    }
    Ok(())
}

fn run_legend(out: Option<&Path>) -> Result<(), AppError> {
    let svg = render_legend_svg();
    match out {
        Some(path) => {
            std::fs::write(path, svg)?;
            tracing::info!(path = %path.display(), "wrote legend");
        }
        None => print!("{svg}"),
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
