use super::super::*;

// ========================================================================
// Post-Column Option Tests (INHERITS, WITH OIDS, WITHOUT OIDS)
// ========================================================================

#[test]
fn test_parse_create_table_inherits() {
    let table = parse_table("CREATE TABLE t (c1 int) INHERITS (parent1, parent2);");
    assert_eq!(table.inherits.as_deref(), Some("parent1, parent2"));
    assert_eq!(table.column_names(), vec!["c1"]);
    assert!(table.constraints.is_empty());
    assert_eq!(table.with_oids, None);
}

#[test]
fn test_parse_create_table_with_oids() {
    let table = parse_table("CREATE TABLE t (c1 int) WITH OIDS;");
    assert_eq!(table.with_oids, Some(true));
}

#[test]
fn test_parse_create_table_without_oids() {
    let table = parse_table("CREATE TABLE t (c1 int) WITHOUT OIDS;");
    assert_eq!(table.with_oids, Some(false));
}

#[test]
fn test_parse_create_table_oids_unset_by_default() {
    let table = parse_table("CREATE TABLE t (c1 int);");
    assert_eq!(table.with_oids, None);
    assert_eq!(table.inherits, None);
}

#[test]
fn test_parse_create_table_inherits_and_oids() {
    let table = parse_table("CREATE TABLE t (c1 int) INHERITS (base) WITHOUT OIDS;");
    assert_eq!(table.inherits.as_deref(), Some("base"));
    assert_eq!(table.with_oids, Some(false));

    let table = parse_table("CREATE TABLE t (c1 int) WITH OIDS INHERITS ( base );");
    assert_eq!(table.inherits.as_deref(), Some("base"));
    assert_eq!(table.with_oids, Some(true));
}

#[test]
fn test_parse_create_table_options_across_lines() {
    let table = parse_table("CREATE TABLE t (\n    c1 int\n)\nINHERITS (a, b)\nWITH OIDS;\n");
    assert_eq!(table.inherits.as_deref(), Some("a, b"));
    assert_eq!(table.with_oids, Some(true));
}

#[test]
fn test_parse_post_columns_returns_residual() {
    let mut table = Table::new("t".to_string());
    let residual = parse_post_columns(&mut table, " INHERITS (p); TABLESPACE x");
    assert_eq!(residual.trim(), "TABLESPACE x");
    assert_eq!(table.inherits.as_deref(), Some("p"));
}

#[test]
fn test_parse_post_columns_empty() {
    let mut table = Table::new("t".to_string());
    assert_eq!(parse_post_columns(&mut table, ""), "");
    assert_eq!(table.with_oids, None);
}

#[test]
fn test_parse_create_table_options_inside_columns_ignored() {
    let table = parse_table("CREATE TABLE t (note text DEFAULT 'WITH OIDS', c int);");
    assert_eq!(table.with_oids, None);
    assert_eq!(table.column_names(), vec!["note", "c"]);
}
