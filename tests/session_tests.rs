mod common;
use common::Workspace;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::time::Duration;

#[test]
fn test_session_mark_undo_export() {
    let ws = Workspace::new();
    let input = ws.sample_xlsx();

    let script = "ab1234\n\
                  mark cd0001 -p tpv-fisico\n\
                  undo\n\
                  undo\n\
                  undo\n\
                  mark AB99 99 -n \"pago parcial\"\n\
                  summary\n\
                  show pago\n\
                  export final\n\
                  log\n\
                  quit\n";

    ws.cmd()
        .arg("session")
        .arg(&input)
        .arg("--dir")
        .arg(ws.path())
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("3 row(s) loaded."))
        .stdout(contains("Code 'AB1234' marked on 1 row(s)."))
        .stdout(contains("annotation 'TPV FISICO' applied to 1 row(s)"))
        .stdout(contains("Last change undone (1 row(s) restored)."))
        .stdout(contains("Nothing to undo."))
        .stdout(contains("Total: 3 | ✔️ Marked: 0 | 📝 Annotated: 1"))
        .stdout(contains("XLSX export completed"))
        .stdout(contains("CSV export completed"))
        .stdout(contains("Session log"));

    let csv = fs::read_to_string(ws.file("final.csv")).expect("csv");
    assert!(csv.contains("AB9999Y,pago parcial,Luis,,20"));
    assert!(csv.contains("AB1234X,,Ana,05/03/2024,10.5"));
}

#[test]
fn test_session_unmark_and_paste() {
    let ws = Workspace::new();
    let input = ws.sample_csv();

    let script = "paste -p duplicado\n\
                  AB1234\n\
                  \n\
                  CD0001\n\
                  XXXX\n\
                  .\n\
                  unmark ab1234x\n\
                  unmark qq\n\
                  undo\n\
                  export --force\n";

    ws.cmd()
        .arg("session")
        .arg(&input)
        .arg("--dir")
        .arg(ws.path())
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("No row found for 'XXXX'."))
        .stdout(contains("Mark removed from 1 row(s) with code 'AB1234X'."))
        .stdout(contains("No row found for 'QQ'."));

    // undo only rolls back the CD0001 apply; the unmark stays
    let csv = fs::read_to_string(ws.file("albaranes_marcados.csv")).expect("csv");
    assert!(csv.contains("AB1234X,,Ana"));
    assert!(csv.contains("CD0001Z,,Eva"));
}

#[test]
fn test_session_bad_lines_do_not_abort() {
    let ws = Workspace::new();
    let input = ws.sample_csv();

    ws.cmd()
        .arg("session")
        .arg(&input)
        .write_stdin("mark \"open\nmark ab1234 -p nope\nexport bad/name\nab1234\n")
        .assert()
        .success()
        .stdout(contains("unterminated quote"))
        .stdout(contains("Code 'AB1234' marked on 1 row(s)."))
        .stderr(contains("Invalid export file name").and(contains("Unknown preset").not()));
}

#[test]
fn test_session_export_asks_before_overwriting() {
    let ws = Workspace::new();
    let input = ws.sample_csv();
    fs::write(ws.file("dup.csv"), "old").expect("existing csv");

    ws.cmd()
        .arg("session")
        .arg(&input)
        .arg("--dir")
        .arg(ws.path())
        .write_stdin("ab1234\nexport dup\ny\nquit\n")
        .timeout(Duration::from_secs(20))
        .assert()
        .success()
        .stdout(contains("already exists"))
        .stdout(contains("Existing file will be overwritten."))
        .stdout(contains("CSV export completed"));

    let csv = fs::read_to_string(ws.file("dup.csv")).expect("csv");
    assert!(csv.starts_with("Nº,Marked"));
    assert!(csv.contains("AB1234X,✔️"));
    assert!(ws.file("dup.xlsx").exists());
}

#[test]
fn test_session_export_cancel_keeps_file_and_session() {
    let ws = Workspace::new();
    let input = ws.sample_csv();
    fs::write(ws.file("dup.csv"), "old").expect("existing csv");

    ws.cmd()
        .arg("session")
        .arg(&input)
        .arg("--dir")
        .arg(ws.path())
        .write_stdin("ab1234\nexport dup\nn\nsummary\nquit\n")
        .timeout(Duration::from_secs(20))
        .assert()
        .success()
        .stdout(contains("already exists"))
        .stdout(contains("Total: 3 | ✔️ Marked: 1 | 📝 Annotated: 0"))
        .stderr(contains("export cancelled"));

    assert_eq!(fs::read_to_string(ws.file("dup.csv")).expect("csv"), "old");
    assert!(!ws.file("dup.xlsx").exists());
}

#[test]
fn test_show_filter() {
    let ws = Workspace::new();
    let input = ws.sample_csv();

    ws.cmd()
        .arg("show")
        .arg(&input)
        .args(["--filter", "cd00"])
        .assert()
        .success()
        .stdout(contains("CD0001Z"))
        .stdout(contains("AB1234X").not())
        .stdout(contains("Total: 3"));
}

#[test]
fn test_init_and_print_config() {
    let ws = Workspace::new();

    ws.cmd().arg("init").assert().success();
    assert!(fs::read_to_string(ws.config()).expect("conf").contains("id_column"));

    ws.cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(contains("already exists"));

    fs::write(ws.config(), "check_mark: OK\n").expect("conf");
    ws.cmd()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("check_mark: OK"))
        .stdout(contains("max_code_len: 14"));
}

#[test]
fn test_custom_check_mark_is_used() {
    let ws = Workspace::new();
    let input = ws.sample_csv();
    fs::write(ws.config(), "check_mark: X\nalert_bell: false\n").expect("conf");

    ws.cmd()
        .arg("batch")
        .arg(&input)
        .args(["--dir"])
        .arg(ws.path())
        .write_stdin("ab1234\n")
        .assert()
        .success()
        .stdout(contains("X Marked: 1"));

    let csv = fs::read_to_string(ws.file("albaranes_marcados.csv")).expect("csv");
    assert!(csv.contains("AB1234X,X,Ana"));
}
