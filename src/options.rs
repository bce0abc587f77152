use serde::Serialize;

/// Letter case applied to a class of words in the formatted output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    /// Keep the original case.
    Preserve,
    /// Convert to uppercase.
    Upper,
    /// Convert to lowercase.
    Lower,
}

/// Indentation style for formatted statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum IndentStyle {
    /// Indent by `tab_width` spaces (or a tab when `use_tabs` is set).
    Standard,
    /// Tabular layout with a 10-column keyword gutter, keywords aligned left.
    TabularLeft,
    /// Tabular layout with a 10-column keyword gutter, keywords aligned right.
    TabularRight,
}

/// Newline placement around logical operators (`AND`, `OR`, `XOR`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalOperatorNewline {
    /// Break the line before the operator.
    Before,
    /// Break the line after the operator.
    After,
}

/// SQL dialect understood by the embedded formatting bundle.
///
/// The serialized token of each variant is the exact identifier the bundle's
/// option schema expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Dialect {
    /// Generic standard SQL.
    #[serde(rename = "sql")]
    Sql,
    /// Google BigQuery.
    #[serde(rename = "bigquery")]
    BigQuery,
    /// IBM Db2.
    #[serde(rename = "db2")]
    Db2,
    /// IBM Db2 for i.
    #[serde(rename = "db2i")]
    Db2i,
    /// DuckDB.
    #[serde(rename = "duckdb")]
    DuckDb,
    /// Apache Hive.
    #[serde(rename = "hive")]
    Hive,
    /// MariaDB.
    #[serde(rename = "mariadb")]
    MariaDb,
    /// MySQL.
    #[serde(rename = "mysql")]
    MySql,
    /// TiDB.
    #[serde(rename = "tidb")]
    TiDb,
    /// Couchbase N1QL.
    #[serde(rename = "n1ql")]
    N1ql,
    /// Oracle PL/SQL.
    #[serde(rename = "plsql")]
    PlSql,
    /// PostgreSQL.
    #[serde(rename = "postgresql")]
    PostgreSql,
    /// Amazon Redshift.
    #[serde(rename = "redshift")]
    Redshift,
    /// SingleStoreDB.
    #[serde(rename = "singlestoredb")]
    SingleStoreDb,
    /// Snowflake.
    #[serde(rename = "snowflake")]
    Snowflake,
    /// Spark SQL.
    #[serde(rename = "spark")]
    Spark,
    /// SQLite.
    #[serde(rename = "sqlite")]
    Sqlite,
    /// SQL Server Transact-SQL.
    #[serde(rename = "transactsql")]
    TransactSql,
    /// Alias dialect token for Transact-SQL.
    #[serde(rename = "tsql")]
    TSql,
    /// Trino (formerly PrestoSQL).
    #[serde(rename = "trino")]
    Trino,
}

/// Configuration for SQL formatting.
///
/// Every field is optional; a field left as `None` is omitted from the JSON
/// handed to the embedded bundle, which then applies its own default. The
/// record is flat and carries no cross-field constraints — combinations the
/// bundle considers invalid are rejected (or ignored) by the bundle itself.
///
/// # Example
///
/// ```rust
/// use sqlfmt::{CaseStyle, Dialect, FormatOptions};
///
/// let mut options = FormatOptions::default();
/// options.language = Some(Dialect::PostgreSql);
/// options.keyword_case = Some(CaseStyle::Lower);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatOptions {
    /// Case of data type names (e.g. `INT`, `VARCHAR`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type_case: Option<CaseStyle>,

    /// Pack operators densely, without surrounding spaces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dense_operators: Option<bool>,

    /// Maximum width of a parenthesized expression before it is broken
    /// across lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression_width: Option<u32>,

    /// Case of function names (e.g. `COUNT`, `SUM`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_case: Option<CaseStyle>,

    /// Case of identifiers (column names, table names).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier_case: Option<CaseStyle>,

    /// Indentation style.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent_style: Option<IndentStyle>,

    /// Case of reserved keywords (e.g. `SELECT`, `FROM`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword_case: Option<CaseStyle>,

    /// SQL dialect to format as.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Dialect>,

    /// Number of blank lines between consecutive statements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines_between_queries: Option<u32>,

    /// Newline placement for logical operators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logical_operator_newline: Option<LogicalOperatorNewline>,

    /// Place the statement separator (`;`) on its own line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newline_before_semicolon: Option<bool>,

    /// Number of spaces per indentation level (ignored when `use_tabs` is
    /// set).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_width: Option<u32>,

    /// Indent with tab characters instead of spaces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_tabs: Option<bool>,
}

impl Default for FormatOptions {
    /// The documented default configuration: uppercase keywords, functions
    /// and data types, preserved identifier case, standard 4-space indent,
    /// generic SQL dialect, 2 blank lines between statements, and the
    /// semicolon on its own line.
    fn default() -> Self {
        Self {
            data_type_case: Some(CaseStyle::Upper),
            dense_operators: None,
            expression_width: Some(80),
            function_case: Some(CaseStyle::Upper),
            identifier_case: Some(CaseStyle::Preserve),
            indent_style: Some(IndentStyle::Standard),
            keyword_case: Some(CaseStyle::Upper),
            language: Some(Dialect::Sql),
            lines_between_queries: Some(2),
            logical_operator_newline: Some(LogicalOperatorNewline::After),
            newline_before_semicolon: Some(true),
            tab_width: Some(4),
            use_tabs: None,
        }
    }
}

impl FormatOptions {
    /// Creates options with every field unset, deferring entirely to the
    /// embedded bundle's defaults. Serializes to `{}`.
    pub fn unset() -> Self {
        Self {
            data_type_case: None,
            dense_operators: None,
            expression_width: None,
            function_case: None,
            identifier_case: None,
            indent_style: None,
            keyword_case: None,
            language: None,
            lines_between_queries: None,
            logical_operator_newline: None,
            newline_before_semicolon: None,
            tab_width: None,
            use_tabs: None,
        }
    }
}
