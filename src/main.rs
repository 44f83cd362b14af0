use std::env;
use std::ffi::OsStr;
use std::io::{self, BufRead, Write};

use log::{error, info};
use seahorse::{App, Command, Context, Flag, FlagType};

use course_schedule::input::{Session, SessionBuilder};
use course_schedule::preferences::Preferences;
use course_schedule::schedule::{AssemblyMode, JsonSink, ScheduleSink, TextSink};
use course_schedule::verifier::{Conflict, ReportMode};
use course_schedule::{deliver_schedule, Outcome};

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "info");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    let args: Vec<String> = env::args().collect();
    app(&args[0]).run(args);
}

fn exit_on_error(result: anyhow::Result<()>) {
    if let Err(e) = result {
        error!("{:?}", e);
        ::std::process::exit(1);
    }
}

trait ContextExt {
    fn context(&self) -> &Context;

    fn optional_string_flag(&self, name: &str) -> Option<String> {
        self.context()
            .string_flag(name)
            .ok()
            .filter(|value| !value.trim().is_empty())
    }
}

impl ContextExt for Context {
    fn context(&self) -> &Context {
        self
    }
}

/// Applies the flags shared by all commands.
fn configure(context: &Context, builder: &mut SessionBuilder) -> anyhow::Result<()> {
    if let Some(catalog) = context.optional_string_flag("catalog") {
        builder.catalog_file(catalog)?;
    }

    if context.bool_flag("select") {
        builder.assembly(AssemblyMode::SelectSlot);
    }

    if context.bool_flag("exhaustive") {
        builder.report(ReportMode::Exhaustive);
    }

    Ok(())
}

fn run(context: &Context, builder: SessionBuilder) -> anyhow::Result<()> {
    let session: Session = builder.build()?;

    let stdout = io::stdout().lock();
    let mut sink: Box<dyn ScheduleSink> = if context.bool_flag("json") {
        Box::new(JsonSink::new(stdout))
    } else {
        Box::new(TextSink::new(stdout))
    };

    match deliver_schedule(&session, sink.as_mut())? {
        Outcome::Accepted(schedule) => info!("printed {} courses", schedule.len()),
        Outcome::Rejected(conflicts) => write_rejection(&mut io::stdout(), &conflicts)?,
    }

    Ok(())
}

fn write_rejection<W: Write>(writer: &mut W, conflicts: &[Conflict]) -> io::Result<()> {
    for conflict in conflicts {
        writeln!(writer, "{}", conflict)?;
    }

    writeln!(writer, "Schedule could not be created due to conflicts.")
}

fn make(context: &Context) -> anyhow::Result<()> {
    let mut builder = Session::builder();
    configure(context, &mut builder)?;

    if let Some(path) = context.optional_string_flag("preferences") {
        builder.preferences_file(path)?;
    }

    let days_off = context.optional_string_flag("days-off");
    let start = context.optional_string_flag("hours-off-start");
    let end = context.optional_string_flag("hours-off-end");

    // flags take precedence over the preferences file
    if days_off.is_some() || start.is_some() || end.is_some() {
        builder.preferences(Preferences::parse(
            days_off.as_deref().unwrap_or_default(),
            start.as_deref().unwrap_or_default(),
            end.as_deref().unwrap_or_default(),
        )?);
    }

    run(context, builder)
}

fn ask(question: &str) -> anyhow::Result<String> {
    print!("{}", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    Ok(answer.trim().to_string())
}

fn prompt(context: &Context) -> anyhow::Result<()> {
    let mut builder = Session::builder();
    configure(context, &mut builder)?;

    let days_off = ask("Enter preferred days off (comma separated): ")?;
    let start = ask("Enter start time for hours off (HH:MM): ")?;
    let end = ask("Enter end time for hours off (HH:MM): ")?;

    builder.preferences(Preferences::parse(&days_off, &start, &end)?);

    run(context, builder)
}

fn shared_flags(command: Command) -> Command {
    command
        .flag(
            Flag::new("catalog", FlagType::String)
                .description("[optional] Path to a toml or json catalog. Default: the built-in catalog"),
        )
        .flag(
            Flag::new("select", FlagType::Bool)
                .description("[optional] Pick one fitting slot per course instead of taking all of them."),
        )
        .flag(
            Flag::new("exhaustive", FlagType::Bool)
                .description("[optional] Report every conflict instead of only the first one."),
        )
        .flag(Flag::new("json", FlagType::Bool).description("[optional] Print the schedule as json."))
}

fn app(bin: &str) -> App {
    let make_command = shared_flags(
        Command::new("make")
            .usage(format!("{} make [args]", bin))
            .description("Makes a schedule and checks it against your days and hours off.")
            .flag(
                Flag::new("preferences", FlagType::String)
                    .description("[optional] Path to a toml file with `days_off` and `hours_off`."),
            )
            .flag(
                Flag::new("days-off", FlagType::String)
                    .description("[optional] Comma separated days off, like `Monday, Friday`."),
            )
            .flag(
                Flag::new("hours-off-start", FlagType::String)
                    .description("[optional] Start of the hours off (HH:MM)."),
            )
            .flag(
                Flag::new("hours-off-end", FlagType::String)
                    .description("[optional] End of the hours off (HH:MM)."),
            ),
    )
    .action(|context: &Context| exit_on_error(make(context)));

    let prompt_command = shared_flags(
        Command::new("prompt")
            .usage(format!("{} prompt [args]", bin))
            .description("Asks for your days and hours off and then makes a schedule."),
    )
    .action(|context: &Context| exit_on_error(prompt(context)));

    App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!("{} [args]", bin))
        .command(make_command)
        .command(prompt_command)
}
