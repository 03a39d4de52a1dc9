use super::super::*;

// ========================================================================
// Named Constraint Tests
// ========================================================================

#[test]
fn test_parse_create_table_with_named_primary_key() {
    let table = parse_table("CREATE TABLE t (c1 int, CONSTRAINT pk_t PRIMARY KEY (c1));");
    assert_eq!(table.column_names(), vec!["c1"]);
    assert_eq!(table.constraint_names(), vec!["pk_t"]);
    assert_eq!(table.find_constraint("pk_t").unwrap().definition, "PRIMARY KEY (c1)");
    assert!(table.find_column("pk_t").is_none());
    assert_eq!(table.primary_key().map(|c| c.name.as_str()), Some("pk_t"));
}

#[test]
fn test_parse_create_table_composite_key_not_split() {
    let table = parse_table(
        "CREATE TABLE order_items (
            order_id integer,
            product_id integer,
            CONSTRAINT order_items_pkey PRIMARY KEY (order_id, product_id)
        );",
    );
    assert_eq!(table.column_names(), vec!["order_id", "product_id"]);
    assert_eq!(
        table.find_constraint("order_items_pkey").unwrap().definition,
        "PRIMARY KEY (order_id, product_id)"
    );
}

#[test]
fn test_parse_create_table_check_with_quoted_list() {
    let table = parse_table(
        "CREATE TABLE t (
            kind text,
            CONSTRAINT kind_check CHECK (kind IN ('a,b', 'c)')),
            CONSTRAINT t_fk FOREIGN KEY (kind) REFERENCES kinds(name) ON DELETE CASCADE
        );",
    );
    assert_eq!(table.column_names(), vec!["kind"]);
    assert_eq!(table.constraint_names(), vec!["kind_check", "t_fk"]);
    assert_eq!(
        table.find_constraint("kind_check").unwrap().definition,
        "CHECK (kind IN ('a,b', 'c)'))"
    );
    assert_eq!(
        table.find_constraint("t_fk").unwrap().definition,
        "FOREIGN KEY (kind) REFERENCES kinds(name) ON DELETE CASCADE"
    );
    assert!(table.primary_key().is_none());
}

#[test]
fn test_parse_create_table_constraint_before_columns() {
    let table = parse_table("CREATE TABLE t (CONSTRAINT u UNIQUE (a), a int);");
    assert_eq!(table.constraint_names(), vec!["u"]);
    assert_eq!(table.column_names(), vec!["a"]);
}

#[test]
fn test_parse_create_table_unnamed_constraint_becomes_column() {
    // Only the CONSTRAINT keyword marks a constraint clause.
    let table = parse_table("CREATE TABLE t (a int, PRIMARY KEY (a));");
    assert_eq!(table.column_names(), vec!["a", "PRIMARY"]);
    assert!(table.constraints.is_empty());
}
