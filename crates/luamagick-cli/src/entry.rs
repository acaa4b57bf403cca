use std::{
    io::Read,
    path::{Path, PathBuf},
};

use luamagick::Surface;
use mlua::Lua;
use tracing_subscriber::{EnvFilter, registry::LookupSpan};

use crate::prelude::*;

#[derive(Debug, clap::Parser)]
#[command(version, author, about)]
struct Opts {
    /// Log filter, using env_logger-like syntax
    #[arg(long, env = "RUST_LOG")]
    log_filter: Option<String>,

    /// How much of the MagickWand API to expose to the script
    #[arg(short, long, env = "LUAMAGICK_SURFACE", value_enum, default_value_t)]
    surface: Surface,

    /// Name of the global the module table is bound to
    #[arg(short, long, env = "LUAMAGICK_GLOBAL", default_value = "magick")]
    global: String,

    /// Path of the script to run, or - to read it from standard input
    script: PathBuf,

    /// Arguments for the script, available to it as the global `arg` table
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

macro_rules! init_error {
    ($($args:tt)*) => ({
        ::tracing::error!($($args)*);
        ::std::process::exit(1);
    })
}

// Scripts own stdout, so diagnostics go to stderr
fn fmt_layer<S>() -> impl tracing_subscriber::Layer<S>
where S: tracing::Subscriber + for<'a> LookupSpan<'a> {
    tracing_subscriber::fmt::layer().with_writer(std::io::stderr)
}

#[instrument(name = "init_logger", skip(log_filter))]
fn init_subscriber(log_filter: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_new(log_filter)
                .unwrap_or_else(|e| init_error!("Invalid log filter {log_filter:?}: {e}")),
        )
        .with(fmt_layer())
        .try_init()
        .unwrap_or_else(|e| init_error!("Error initializing logger: {e}"));
}

#[inline]
pub fn main() {
    let tmp_logger =
        tracing::subscriber::set_default(tracing_subscriber::registry().with(fmt_layer()));
    let span = error_span!("boot").entered();

    [
        ".env.local",
        if cfg!(debug_assertions) {
            ".env.dev"
        } else {
            ".env.prod"
        },
        ".env",
    ]
    .into_iter()
    .try_for_each(|p| match dotenvy::from_filename(p) {
        Ok(p) => {
            trace!("Loaded env from {p:?}");
            Ok(())
        },
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!("Error loading env from {p:?}")),
    })
    .unwrap_or_else(|e| init_error!("Error loading .env files: {e:?}"));

    let opts: Opts = clap::Parser::parse();
    drop(span);
    let span = error_span!("boot", ?opts).entered();

    init_subscriber(opts.log_filter.as_deref().unwrap_or("info"));

    drop((span, tmp_logger));

    std::process::exit(match run(opts) {
        Ok(()) => 0,
        Err(e) => {
            error!("{e:?}");
            1
        },
    });
}

fn lua_error(e: mlua::Error) -> Error { anyhow!("{e}") }

fn read_script(script: &Path) -> Result<(String, Vec<u8>)> {
    if script.as_os_str() == "-" {
        let mut buf = vec![];
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("Error reading script from standard input")?;
        return Ok(("=stdin".into(), buf));
    }

    let buf = std::fs::read(script).with_context(|| format!("Error reading script {script:?}"))?;
    Ok((format!("@{}", script.display()), buf))
}

#[instrument(level = "error", skip(opts))]
fn run(opts: Opts) -> Result {
    let Opts {
        log_filter: _,
        surface,
        global,
        script,
        args,
    } = opts;

    let (chunk_name, source) = read_script(&script)?;

    let lua = Lua::new();
    let module = luamagick::open(&lua, surface)
        .map_err(lua_error)
        .context("Error loading luamagick")?;

    let globals = lua.globals();
    globals
        .set(global.as_str(), module)
        .map_err(lua_error)
        .with_context(|| format!("Error binding module to global {global:?}"))?;

    let arg = lua
        .create_sequence_from(args)
        .and_then(|t| t.raw_set(0, script.display().to_string()).map(|()| t))
        .map_err(lua_error)
        .context("Error building script arguments")?;
    globals.set("arg", arg).map_err(lua_error)?;

    debug!(%surface, %global, ?script, "Running script");

    lua.load(source)
        .set_name(chunk_name)
        .exec()
        .map_err(lua_error)
        .with_context(|| format!("Error running script {script:?}"))
}
