use daylog::core::labels::{LabelIssue, LabelLogic, check_consistency, tree};
use daylog::db::labels::{insert_label, load_labels};
use daylog::db::pool::DbPool;
use daylog::models::label::Label;

fn label(id: i64, name: &str, parent_id: Option<i64>) -> Label {
    Label {
        id,
        name: name.to_string(),
        color: "#000000".to_string(),
        parent_id,
    }
}

#[test]
fn test_consistent_taxonomy_has_no_issues() {
    let labels = vec![
        label(1, "Work", None),
        label(2, "Coding", Some(1)),
        label(3, "Social", None),
    ];
    assert!(check_consistency(&labels).is_empty());
}

#[test]
fn test_duplicates_ignore_case_and_spaces() {
    let labels = vec![label(1, "Work", None), label(2, " work ", None)];
    let issues = check_consistency(&labels);
    assert_eq!(issues.len(), 1);
    assert!(matches!(&issues[0], LabelIssue::Duplicate(names) if names.len() == 2));
}

#[test]
fn test_child_named_like_its_parent() {
    let labels = vec![label(1, "Work", None), label(2, "Work", Some(1))];
    let issues = check_consistency(&labels);
    assert!(issues.contains(&LabelIssue::SameAsParent {
        child: "Work | Work".to_string()
    }));
}

#[test]
fn test_child_repeating_its_parent() {
    let labels = vec![label(1, "Work", None), label(2, "Work meeting", Some(1))];
    let issues = check_consistency(&labels);
    assert_eq!(
        issues,
        vec![LabelIssue::RepeatsParent {
            child: "Work | Work meeting".to_string(),
            parent: "Work".to_string()
        }]
    );
    assert!(issues[0].to_string().contains("Work meeting"));
}

#[test]
fn test_nested_parent_is_broken() {
    let labels = vec![
        label(1, "Work", None),
        label(2, "Coding", Some(1)),
        label(3, "Rust", Some(2)),
    ];
    let issues = check_consistency(&labels);
    assert_eq!(
        issues,
        vec![LabelIssue::BrokenParent {
            child: "Rust".to_string()
        }]
    );
}

#[test]
fn test_tree_groups_children_under_roots() {
    let labels = vec![
        label(1, "Work", None),
        label(2, "Social", None),
        label(3, "Coding", Some(1)),
        label(4, "Calls", Some(2)),
    ];
    let t = tree(&labels);
    assert_eq!(t.len(), 2);
    assert_eq!(t[0].0.name, "Work");
    assert_eq!(t[0].1.iter().map(|l| l.name.as_str()).collect::<Vec<_>>(), vec!["Coding"]);
    assert_eq!(t[1].1[0].display_name(&labels), "Social | Calls");
}

#[test]
fn test_add_rename_and_delete_labels() {
    let mut pool = DbPool::in_memory().expect("db");

    let work = LabelLogic::add(&mut pool, "Work", Some("#112233"), None).expect("add work");
    let coding = LabelLogic::add(&mut pool, "Coding", None, Some("work")).expect("add coding");
    assert_eq!(coding.parent_id, Some(work.id));
    assert_eq!(coding.color, "#000000");

    assert!(LabelLogic::add(&mut pool, "WORK", None, None).is_err());
    assert!(LabelLogic::add(&mut pool, "Rust", None, Some("Coding")).is_err());
    assert!(LabelLogic::add(&mut pool, "Bad", Some("blue"), None).is_err());

    // Parents with children stay.
    assert!(LabelLogic::remove(&mut pool, "Work").is_err());

    let renamed = LabelLogic::update(&mut pool, "coding", Some("Programming"), None).expect("rename");
    assert_eq!(renamed.name, "Programming");

    LabelLogic::remove(&mut pool, "Programming").expect("remove child");
    LabelLogic::remove(&mut pool, "Work").expect("remove parent");
    assert!(load_labels(&pool.conn).expect("load").is_empty());
}

#[test]
fn test_check_sees_rows_written_behind_the_logic() {
    let pool = DbPool::in_memory().expect("db");
    let parent = insert_label(&pool.conn, "Social", "#000000", None).expect("parent");
    insert_label(&pool.conn, "social", "#000000", Some(parent)).expect("child");

    let issues = check_consistency(&load_labels(&pool.conn).expect("load"));
    assert_eq!(issues.len(), 2);
}
