//! Assembles `SELECT` statements from reflected schemas.

use crate::query::{
    ast::statement::Statement,
    compiler::Compiler,
    dialect::Dialect,
    token::Token,
};
use model::{
    SchemaError,
    core::value::Value,
    records::record::Record,
    schema::{
        cache::schema_of,
        field::{FieldDescriptor, ForeignDescriptor, Schema},
    },
};
use tracing::debug;

pub struct QueryGenerator<'a> {
    dialect: &'a dyn Dialect,
}

impl<'a> QueryGenerator<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self { dialect }
    }

    /// Generates the SQL selecting every record of `R` from `table`, and the
    /// parameters to execute it with.
    pub fn select_record<R: Record>(
        &self,
        table: &str,
        args: Vec<Value>,
    ) -> Result<(String, Vec<Value>), SchemaError> {
        let schema = schema_of::<R>()?;
        Ok(self.select(&schema, table, args))
    }

    /// Generates a SQL SELECT statement and its parameters.
    ///
    /// When the first argument is text it is appended verbatim after the
    /// joins; every other argument is returned untouched as a positional
    /// parameter.
    pub fn select(&self, schema: &Schema, table: &str, args: Vec<Value>) -> (String, Vec<Value>) {
        let (clause, params) = split_clause(args);

        let mut statement = select_statement(schema, table);
        if let Some(clause) = clause {
            statement.text(&clause);
        }

        let sql = Compiler::new(self.dialect).compile(&statement);
        debug!(
            record = schema.record(),
            table,
            params = params.len(),
            "SELECT statement: {}",
            sql
        );
        (sql, params)
    }
}

/// Builds `SELECT <columns> FROM "table" <joins>` for `schema`.
///
/// Columns are projected in declaration order, depth-first through foreign
/// relations. Each relation adds one join, placed before the joins of its own
/// nested relations.
pub fn select_statement(schema: &Schema, table: &str) -> Statement {
    let mut columns = Vec::with_capacity(schema.column_count());
    let mut joins = Vec::new();
    project(schema.fields(), table, &mut columns, &mut joins);

    let mut statement = Statement::new();
    statement
        .token(Token::Select)
        .comma_separated(columns)
        .token(Token::From)
        .ident(table);

    for join in joins {
        statement.append(join);
    }
    statement
}

fn project(
    fields: &[FieldDescriptor],
    owner: &str,
    columns: &mut Vec<Statement>,
    joins: &mut Vec<Statement>,
) {
    for field in fields.iter().filter(|field| !field.omitted) {
        match &field.foreign {
            None => {
                let mut column = Statement::new();
                column.qualified(owner, &field.column);
                columns.push(column);
            }
            Some(foreign) => {
                let alias = foreign.alias();
                joins.push(join_clause(owner, foreign, &alias));
                project(&foreign.fields, &alias, columns, joins);
            }
        }
    }
}

/// `INNER JOIN "table" "alias" ON "alias"."left" = "owner"."right"`
fn join_clause(owner: &str, foreign: &ForeignDescriptor, alias: &str) -> Statement {
    let mut join = Statement::new();
    join.token(Token::InnerJoin)
        .ident(&foreign.table)
        .ident(alias)
        .token(Token::On)
        .qualified(alias, &foreign.left)
        .token(Token::Equal)
        .qualified(owner, &foreign.right);
    join
}

fn split_clause(mut args: Vec<Value>) -> (Option<String>, Vec<Value>) {
    if let Some(Value::String(clause)) = args.first_mut() {
        let clause = std::mem::take(clause);
        args.remove(0);
        return (Some(clause), args);
    }
    (None, args)
}
