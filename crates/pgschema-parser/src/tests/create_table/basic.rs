use super::super::*;

// ========================================================================
// CREATE TABLE Column List Tests
// ========================================================================

#[test]
fn test_parse_create_table_basic() {
    let table = parse_table("CREATE TABLE t (c1 int, c2 text);");
    assert_eq!(table.name, "t");
    assert_eq!(table.column_names(), vec!["c1", "c2"]);
    assert!(table.constraints.is_empty());
    assert_eq!(table.columns[0].data_type.as_deref(), Some("int"));
    assert_eq!(table.columns[1].data_type.as_deref(), Some("text"));
}

#[test]
fn test_parse_create_table_returns_name() {
    let mut schema = Schema::default();
    let name = parse_create_table(&mut schema, "CREATE TABLE accounts (id int);").unwrap();
    assert_eq!(name, "accounts");
    assert!(schema.table_exists("accounts"));
}

#[test]
fn test_parse_create_table_numeric_precision_not_split() {
    let table = parse_table("CREATE TABLE t (n numeric(10,2));");
    assert_eq!(table.column_names(), vec!["n"]);
    assert_eq!(table.columns[0].data_type.as_deref(), Some("numeric(10,2)"));
}

#[test]
fn test_parse_create_table_pg_dump_layout() {
    let table = parse_table(
        "CREATE TABLE public.orders (
    id integer DEFAULT nextval('orders_id_seq'::regclass) NOT NULL,
    customer_id integer NOT NULL,
    total numeric(12,2) DEFAULT 0.00,
    status character varying(20) DEFAULT 'new'::character varying,
    note text
);",
    );

    assert_eq!(table.name, "public.orders");
    assert_eq!(table.column_names(), vec!["id", "customer_id", "total", "status", "note"]);

    let id = table.find_column("id").unwrap();
    assert_eq!(id.data_type.as_deref(), Some("integer"));
    assert_eq!(id.default_value.as_deref(), Some("nextval('orders_id_seq'::regclass)"));
    assert!(!id.nullable);

    let total = table.find_column("total").unwrap();
    assert_eq!(total.data_type.as_deref(), Some("numeric(12,2)"));
    assert_eq!(total.default_value.as_deref(), Some("0.00"));
    assert!(total.nullable);

    let status = table.find_column("status").unwrap();
    assert_eq!(status.data_type.as_deref(), Some("character varying(20)"));
    assert_eq!(status.default_value.as_deref(), Some("'new'::character varying"));
}

#[test]
fn test_parse_create_table_quoted_default_with_delimiters() {
    let table = parse_table("CREATE TABLE t (label text DEFAULT 'a, (b)', n int);");
    assert_eq!(table.column_names(), vec!["label", "n"]);
    assert_eq!(table.columns[0].default_value.as_deref(), Some("'a, (b)'"));
}

#[test]
fn test_parse_create_table_empty_clauses_skipped() {
    let table = parse_table("CREATE TABLE t (, c1 int,, c2 text,);");
    assert_eq!(table.column_names(), vec!["c1", "c2"]);
}

#[test]
fn test_parse_create_table_no_columns() {
    let table = parse_table("CREATE TABLE t ();");
    assert_eq!(table.column_count(), 0);
    assert!(table.constraints.is_empty());
}

#[test]
fn test_parse_create_table_without_semicolon() {
    let table = parse_table("CREATE TABLE t (c1 int)");
    assert_eq!(table.column_names(), vec!["c1"]);
}

#[test]
fn test_parse_create_table_semicolon_followed_by_whitespace() {
    let table = parse_table("CREATE TABLE t (c1 int);\n");
    assert_eq!(table.column_names(), vec!["c1"]);
}

#[test]
fn test_parse_create_table_repeated_column_keeps_first_position() {
    let table = parse_table("CREATE TABLE t (a int, b int, a text);");
    assert_eq!(table.column_names(), vec!["a", "b"]);
    assert_eq!(table.columns[0].data_type.as_deref(), Some("text"));
}

#[test]
fn test_parse_create_table_is_idempotent() {
    let sql = "CREATE TABLE t (
        id integer NOT NULL,
        amount numeric(10,2) DEFAULT 0,
        CONSTRAINT pk_t PRIMARY KEY (id)
    ) INHERITS (base) WITH OIDS;";

    let first = parse_table(sql);
    let second = parse_table(sql);
    assert_eq!(first, second);

    let mut schema = Schema::default();
    parse_create_table(&mut schema, sql).unwrap();
    parse_create_table(&mut schema, sql).unwrap();
    assert_eq!(schema.find_table("t").unwrap(), &first);
}

#[test]
fn test_parse_create_table_statements_accumulate_in_schema() {
    let mut schema = Schema::default();
    parse_create_table(&mut schema, "CREATE TABLE a (x int);").unwrap();
    parse_create_table(&mut schema, "CREATE TABLE b (y int);").unwrap();
    assert_eq!(schema.list_tables(), vec!["a", "b"]);
}
