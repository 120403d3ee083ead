use std::env;
use std::ffi::OsStr;
use std::str::FromStr;

use anyhow::Context as _;
use log::error;
use seahorse::{App, Command, Context, Flag};

use fleet_rotation::input::Config;
use fleet_rotation::time::Date;
use fleet_rotation::{plan_week, render};

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "info");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    if let Err(e) = run() {
        error!("{:?}", e);
        ::std::process::exit(1);
    }
}

mod seahorse_exts {
    use core::fmt;

    use anyhow::Context as _;
    use log::error;
    use seahorse::{App, Command, Context};

    type TryAction<E> = fn(_: &Context) -> Result<(), E>;

    pub trait ErrorLike: Send + Sync + fmt::Debug + 'static {}

    impl<E: Send + Sync + fmt::Debug + 'static> ErrorLike for E {}

    pub trait TryActionExt {
        #[must_use]
        fn try_action<E>(self, action: TryAction<E>) -> Self
        where
            E: ErrorLike;
    }

    impl TryActionExt for App {
        fn try_action<E>(self, action: TryAction<E>) -> Self
        where
            E: ErrorLike,
        {
            self.action(move |context: &Context| {
                if let Err(e) = action(context) {
                    error!("{:?}", e);
                    ::std::process::exit(1);
                }
            })
        }
    }

    impl TryActionExt for Command {
        fn try_action<E>(self, action: TryAction<E>) -> Self
        where
            E: ErrorLike,
        {
            self.action(move |context: &Context| {
                if let Err(e) = action(context) {
                    error!("{:?}", e);
                    ::std::process::exit(1);
                }
            })
        }
    }

    pub trait ContextExt {
        fn context(&self) -> &Context;

        fn required_string_flag(&self, name: &str) -> Result<String, anyhow::Error> {
            self.context()
                .string_flag(name)
                .with_context(|| anyhow::anyhow!("missing required flag \"{}\"", name))
        }
    }

    impl ContextExt for Context {
        fn context(&self) -> &Context {
            self
        }
    }
}

use seahorse_exts::{ContextExt, TryActionExt};

fn load_config(context: &Context) -> anyhow::Result<Config> {
    match context.string_flag("fleet") {
        Ok(path) => Config::try_from_toml_file(&path)
            .with_context(|| format!("failed to load fleet file \"{}\"", path)),
        Err(_) => Ok(Config::standard()),
    }
}

fn reference_date(context: &Context) -> anyhow::Result<Date> {
    let date = context.required_string_flag("date")?;
    let date = Date::from_str(&date)?;

    // shift whole weeks, the "previous/next week" navigation
    let offset = context.int_flag("offset").unwrap_or(0);
    let days = offset.unsigned_abs() * 7;

    if offset < 0 {
        Ok(date.sub_days(days))
    } else {
        Ok(date.add_days(days))
    }
}

fn plan(context: &Context) -> anyhow::Result<()> {
    let config = load_config(context)?;
    let reference = reference_date(context)?;

    let plan = plan_week(&config, reference);

    if context.bool_flag("json") {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print!("{}", render::week_table(config.fleet(), &plan));
    }

    Ok(())
}

fn run() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    let plan_command = Command::new("plan")
        .usage(format!("{} plan --date 2024-05-13 [args]", args[0]))
        .description("Plans the driver rotation for the week containing the given date.")
        .flag(
            Flag::new("date", seahorse::FlagType::String)
                .description("Any date (YYYY-MM-DD) inside the week to plan."),
        )
        .flag(
            Flag::new("fleet", seahorse::FlagType::String).description(
                "[optional] Path to a fleet file. Default: the built-in two-truck fleet.",
            ),
        )
        .flag(
            Flag::new("offset", seahorse::FlagType::Int)
                .description("[optional] Shift the planned week by this many weeks. Default: 0"),
        )
        .flag(
            Flag::new("json", seahorse::FlagType::Bool)
                .description("[optional] Print the plan as json instead of a table."),
        )
        .try_action(plan);

    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!("{} [args]", args[0]))
        .command(plan_command);

    app.run(args);

    Ok(())
}
