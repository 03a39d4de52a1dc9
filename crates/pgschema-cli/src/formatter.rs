use pgschema_catalog::{Schema, Table};
use prettytable::{Cell, Row, Table as TextTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn parse(format: &str) -> Option<OutputFormat> {
        match format {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

pub struct SchemaFormatter {
    format: OutputFormat,
}

impl SchemaFormatter {
    pub fn new() -> Self {
        SchemaFormatter { format: OutputFormat::Table }
    }

    pub fn set_format(&mut self, format: OutputFormat) {
        self.format = format;
    }

    pub fn print_schema(&self, schema: &Schema) {
        println!("{}", self.render(schema));
    }

    pub fn render(&self, schema: &Schema) -> String {
        match self.format {
            OutputFormat::Table => self.render_tables(schema),
            OutputFormat::Json => self.render_json(schema),
        }
    }

    fn render_tables(&self, schema: &Schema) -> String {
        let mut output = String::new();
        for table in schema.tables() {
            output.push_str(&format!("Table \"{}\"\n", table.name));
            output.push_str(&Self::text_table(table).to_string());

            if let Some(inherits) = &table.inherits {
                output.push_str(&format!("Inherits: {}\n", inherits));
            }
            match table.with_oids {
                Some(true) => output.push_str("Has OIDs: yes\n"),
                Some(false) => output.push_str("Has OIDs: no\n"),
                None => {}
            }
            output.push('\n');
        }
        output
    }

    fn text_table(table: &Table) -> TextTable {
        let mut text = TextTable::new();
        text.add_row(Row::new(vec![
            Cell::new("Column"),
            Cell::new("Type"),
            Cell::new("Default"),
            Cell::new("Nullable"),
        ]));

        for col in &table.columns {
            text.add_row(Row::new(vec![
                Cell::new(&col.name),
                Cell::new(col.data_type.as_deref().unwrap_or("")),
                Cell::new(col.default_value.as_deref().unwrap_or("")),
                Cell::new(if col.nullable { "yes" } else { "no" }),
            ]));
        }

        for constraint in &table.constraints {
            text.add_row(Row::new(vec![
                Cell::new(&format!("CONSTRAINT {}", constraint.name)),
                Cell::new(&constraint.definition),
                Cell::new(""),
                Cell::new(""),
            ]));
        }

        text
    }

    fn render_json(&self, schema: &Schema) -> String {
        let tables: Vec<serde_json::Value> = schema.tables().map(Self::table_json).collect();
        let mut root = serde_json::Map::new();
        root.insert("schema".to_string(), serde_json::Value::String(schema.name.clone()));
        root.insert("tables".to_string(), serde_json::Value::Array(tables));

        serde_json::to_string_pretty(&serde_json::Value::Object(root))
            .unwrap_or_else(|_| "{}".to_string())
    }

    fn table_json(table: &Table) -> serde_json::Value {
        let columns: Vec<serde_json::Value> = table
            .columns
            .iter()
            .map(|col| {
                serde_json::json!({
                    "name": col.name,
                    "type": col.data_type,
                    "default": col.default_value,
                    "nullable": col.nullable,
                })
            })
            .collect();

        let constraints: Vec<serde_json::Value> = table
            .constraints
            .iter()
            .map(|c| serde_json::json!({ "name": c.name, "definition": c.definition }))
            .collect();

        serde_json::json!({
            "name": table.name,
            "columns": columns,
            "constraints": constraints,
            "inherits": table.inherits,
            "with_oids": table.with_oids,
        })
    }
}

impl Default for SchemaFormatter {
    fn default() -> Self {
        Self::new()
    }
}
