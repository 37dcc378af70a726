//! ASCII art banner for interactive mode.

use std::io::IsTerminal;

/// ANSI true-color escape sequences for the baseball banner palette.
struct Colors {
    leather: &'static str,
    seams: &'static str,
    grass: &'static str,
    mound: &'static str,
    title: &'static str,
    subtitle: &'static str,
    reset: &'static str,
}

const COLOR: Colors = Colors {
    leather: "\x1b[38;2;235;235;225m", // Off-white leather
    seams: "\x1b[38;2;200;60;60m",     // Stitch red
    grass: "\x1b[38;2;80;140;70m",     // Outfield green
    mound: "\x1b[38;2;150;110;70m",    // Clay brown
    title: "\x1b[1;38;2;70;120;190m",  // Bold dugout blue
    subtitle: "\x1b[38;2;120;120;140m", // Gray-blue
    reset: "\x1b[0m",
};

const PLAIN: Colors = Colors {
    leather: "",
    seams: "",
    grass: "",
    mound: "",
    title: "",
    subtitle: "",
    reset: "",
};

/// Prints the Bullpen baseball banner to stdout.
///
/// Renders ANSI true-color when stdout is a terminal,
/// falls back to plain text otherwise.
pub fn print_banner() {
    let c = if std::io::stdout().is_terminal() {
        &COLOR
    } else {
        &PLAIN
    };

    let lt = c.leather;
    let sm = c.seams;
    let gr = c.grass;
    let md = c.mound;
    let tt = c.title;
    let st = c.subtitle;
    let r = c.reset;

    println!(
        r#"
{lt}     .-~~~-.{r}       {tt}    ____  __  ____    __    ____  _______   __{r}
{lt}    /{sm}\     {lt}\{r}      {tt}   / __ )/ / / / /   / /   / __ \/ ____/ | / /{r}
{lt}   |{sm} |     {lt}|{r}      {tt}  / __  / / / / /   / /   / /_/ / __/ /  |/ /{r}
{lt}   |{sm} |     {lt}|{r}      {tt} / /_/ / /_/ / /___/ /___/ ____/ /___/ /|  /{r}
{lt}    \{sm}/     {lt}/{r}      {tt}/_____/\____/_____/_____/_/   /_____/_/ |_/{r}
{lt}     `-___-'{r}
{gr}  ~~~~~{md}_____{gr}~~~~~~{r}     {st}"Warming up your environment..."{r}
{gr}  ~~~{md}/     \{gr}~~~~~~~{r}
"#
    );
}
