use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use is_terminal::IsTerminal;
use sqlfmt::{CaseStyle, Dialect, FormatOptions, IndentStyle, LogicalOperatorNewline};

/// A SQL pretty-printer.
///
/// sqlfmt reads SQL from stdin or files and writes formatted SQL to stdout.
/// Formatting is handled by an embedded script bundle supporting ~20 SQL
/// dialects and configurable casing, indentation and line-breaking.
#[derive(Parser, Debug)]
#[command(name = "sqlfmt")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input file(s). If not specified, reads from stdin.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Output file. If not specified, writes to stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// SQL dialect of the input.
    #[arg(short, long, value_enum, default_value = "sql")]
    language: DialectArg,

    /// Case of reserved keywords.
    #[arg(long, value_enum, default_value = "upper")]
    keyword_case: CaseArg,

    /// Case of function names.
    #[arg(long, value_enum, default_value = "upper")]
    function_case: CaseArg,

    /// Case of data type names.
    #[arg(long, value_enum, default_value = "upper")]
    data_type_case: CaseArg,

    /// Case of identifiers.
    #[arg(long, value_enum, default_value = "preserve")]
    identifier_case: CaseArg,

    /// Number of spaces per indentation level.
    #[arg(short, long, default_value = "4")]
    indent: u32,

    /// Use tabs instead of spaces for indentation.
    #[arg(short = 't', long)]
    tabs: bool,

    /// Indentation style.
    #[arg(long, value_enum, default_value = "standard")]
    indent_style: IndentStyleArg,

    /// Maximum width of parenthesized expressions before they are broken up.
    #[arg(short = 'w', long, default_value = "80")]
    expression_width: u32,

    /// Number of blank lines between statements.
    #[arg(long, default_value = "2")]
    lines_between_queries: u32,

    /// Newline placement for logical operators (AND, OR).
    #[arg(long, value_enum, default_value = "after")]
    logical_operator_newline: LogicalNewlineArg,

    /// Pack operators densely, without surrounding spaces.
    #[arg(long)]
    dense_operators: bool,

    /// Keep the statement separator (;) at the end of the last line instead
    /// of on its own line.
    #[arg(long)]
    inline_semicolon: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CaseArg {
    Preserve,
    Upper,
    Lower,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum IndentStyleArg {
    Standard,
    TabularLeft,
    TabularRight,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogicalNewlineArg {
    Before,
    After,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DialectArg {
    Sql,
    Bigquery,
    Db2,
    Db2i,
    Duckdb,
    Hive,
    Mariadb,
    Mysql,
    Tidb,
    N1ql,
    Plsql,
    Postgresql,
    Redshift,
    Singlestoredb,
    Snowflake,
    Spark,
    Sqlite,
    Transactsql,
    Tsql,
    Trino,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("sqlfmt: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    // Read input
    let input = if args.files.is_empty() {
        if io::stdin().is_terminal() {
            return Err("no input files and stdin is a terminal (try --help)".into());
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        let mut combined = String::new();
        for path in &args.files {
            let content = fs::read_to_string(path)
                .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
            combined.push_str(&content);
        }
        combined
    };

    let output = sqlfmt::format(&input, build_options(&args))?;

    // Write output
    if let Some(path) = args.output {
        fs::write(&path, &output)
            .map_err(|e| format!("cannot write '{}': {}", path.display(), e))?;
    } else {
        let mut stdout = io::stdout();
        stdout.write_all(output.as_bytes())?;
        stdout.write_all(b"\n")?;
    }

    Ok(())
}

fn build_options(args: &Args) -> FormatOptions {
    let mut options = FormatOptions::unset();

    options.language = Some(match args.language {
        DialectArg::Sql => Dialect::Sql,
        DialectArg::Bigquery => Dialect::BigQuery,
        DialectArg::Db2 => Dialect::Db2,
        DialectArg::Db2i => Dialect::Db2i,
        DialectArg::Duckdb => Dialect::DuckDb,
        DialectArg::Hive => Dialect::Hive,
        DialectArg::Mariadb => Dialect::MariaDb,
        DialectArg::Mysql => Dialect::MySql,
        DialectArg::Tidb => Dialect::TiDb,
        DialectArg::N1ql => Dialect::N1ql,
        DialectArg::Plsql => Dialect::PlSql,
        DialectArg::Postgresql => Dialect::PostgreSql,
        DialectArg::Redshift => Dialect::Redshift,
        DialectArg::Singlestoredb => Dialect::SingleStoreDb,
        DialectArg::Snowflake => Dialect::Snowflake,
        DialectArg::Spark => Dialect::Spark,
        DialectArg::Sqlite => Dialect::Sqlite,
        DialectArg::Transactsql => Dialect::TransactSql,
        DialectArg::Tsql => Dialect::TSql,
        DialectArg::Trino => Dialect::Trino,
    });

    options.keyword_case = Some(case_style(args.keyword_case));
    options.function_case = Some(case_style(args.function_case));
    options.data_type_case = Some(case_style(args.data_type_case));
    options.identifier_case = Some(case_style(args.identifier_case));

    options.tab_width = Some(args.indent);
    options.use_tabs = Some(args.tabs);
    options.indent_style = Some(match args.indent_style {
        IndentStyleArg::Standard => IndentStyle::Standard,
        IndentStyleArg::TabularLeft => IndentStyle::TabularLeft,
        IndentStyleArg::TabularRight => IndentStyle::TabularRight,
    });

    options.expression_width = Some(args.expression_width);
    options.lines_between_queries = Some(args.lines_between_queries);
    options.logical_operator_newline = Some(match args.logical_operator_newline {
        LogicalNewlineArg::Before => LogicalOperatorNewline::Before,
        LogicalNewlineArg::After => LogicalOperatorNewline::After,
    });
    options.dense_operators = Some(args.dense_operators);
    options.newline_before_semicolon = Some(!args.inline_semicolon);

    options
}

fn case_style(arg: CaseArg) -> CaseStyle {
    match arg {
        CaseArg::Preserve => CaseStyle::Preserve,
        CaseArg::Upper => CaseStyle::Upper,
        CaseArg::Lower => CaseStyle::Lower,
    }
}
