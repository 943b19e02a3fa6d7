use assert_cmd::Command;
use assert_fs::{
    prelude::{FileWriteStr, PathChild},
    NamedTempFile, TempDir,
};
use predicates::prelude::{predicate, PredicateBooleanExt};

const TRANSCRIPT: &str = r#"clingo version 5.6.2
Reading from waba.lp
Solving...
Answer: 1
in(a) extension_cost(#inf) supported_with_weight(action(move(x,y)),3)
Answer: 2
in(b) in(a) extension_cost(2)

supported_with_weight(action(stay),#inf)
SATISFIABLE

Models       : 2
Calls        : 1
Answer: 3
in(c)
"#;

const EXPECTED_CSV: &str = "sequence,cost,a,b,\"action(move(x,y))\",action(stay)\n1,0,1,0,3,0\n2,2,1,1,0,0\n";

const EXPECTED_TSV: &str =
    "sequence\tcost\ta\tb\taction(move(x,y))\taction(stay)\n1\t0\t1\t0\t3\t0\n2\t2\t1\t1\t0\t0\n";

const EXPECTED_JSON: &str = "{\"columns\":[\"sequence\",\"cost\",\"a\",\"b\",\"action(move(x,y))\",\"action(stay)\"],\"rows\":[[1,0,1,0,3,0],[2,2,1,1,0,0]]}\n";

fn convert_cmd() -> Command {
    let mut cmd = Command::cargo_bin("asptab").unwrap();
    cmd.arg("convert").arg("--logging-level").arg("off");
    cmd
}

#[test]
fn test_convert_file_to_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("clingo.out")?;
    file.write_str(TRANSCRIPT)?;
    convert_cmd()
        .arg("-f")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::eq(EXPECTED_CSV));
    file.close().unwrap();
    Ok(())
}

#[test]
fn test_convert_stdin_to_stdout() {
    convert_cmd()
        .write_stdin(TRANSCRIPT)
        .assert()
        .success()
        .stdout(predicate::eq(EXPECTED_CSV));
}

macro_rules! output_file_test {
    ($format:ident, $expected:expr) => {
        paste::paste! {
            #[test]
            fn [<test_convert_to_ $format _file>]() -> Result<(), Box<dyn std::error::Error>> {
                let dir = TempDir::new()?;
                let output = dir.child(concat!("table.", stringify!($format)));
                convert_cmd()
                    .arg("-o")
                    .arg(output.path())
                    .write_stdin(TRANSCRIPT)
                    .assert()
                    .success()
                    .stdout(predicate::str::is_empty());
                assert_eq!($expected, std::fs::read_to_string(output.path())?);
                dir.close().unwrap();
                Ok(())
            }

            #[test]
            fn [<test_convert_explicit_ $format _format>]() {
                convert_cmd()
                    .arg("--format")
                    .arg(stringify!($format))
                    .write_stdin(TRANSCRIPT)
                    .assert()
                    .success()
                    .stdout(predicate::eq($expected));
            }
        }
    };
}

output_file_test!(csv, EXPECTED_CSV);
output_file_test!(tsv, EXPECTED_TSV);
output_file_test!(json, EXPECTED_JSON);

#[test]
fn test_convert_unknown_extension_falls_back_to_csv() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let requested = dir.child("table.xlsx");
    convert_cmd()
        .arg("-o")
        .arg(requested.path())
        .write_stdin(TRANSCRIPT)
        .assert()
        .success();
    assert!(!requested.path().exists());
    assert_eq!(
        EXPECTED_CSV,
        std::fs::read_to_string(dir.child("table.csv").path())?
    );
    dir.close().unwrap();
    Ok(())
}

#[test]
fn test_convert_no_answer_block() {
    Command::cargo_bin("asptab")
        .unwrap()
        .arg("convert")
        .write_stdin("clingo version 5.6.2\nSolving...\nUNSATISFIABLE\n")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no Answer blocks found"));
}

#[test]
fn test_convert_empty_input() {
    convert_cmd().write_stdin("").assert().failure().code(1);
}

const MALFORMED_TRANSCRIPT: &str = "Answer: 1\nin(a) in(b\nAnswer: 2\nin(c)\nSATISFIABLE\n";

#[test]
fn test_convert_malformed_aborts() {
    Command::cargo_bin("asptab")
        .unwrap()
        .arg("convert")
        .write_stdin(MALFORMED_TRANSCRIPT)
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed term"));
}

#[test]
fn test_convert_malformed_skipped() {
    convert_cmd()
        .arg("--skip-malformed")
        .write_stdin(MALFORMED_TRANSCRIPT)
        .assert()
        .success()
        .stdout(predicate::eq("sequence,cost,c\n2,,1\n"));
}

#[test]
fn test_convert_flat_mode() {
    convert_cmd()
        .arg("--mode")
        .arg("flat")
        .write_stdin("in(b) extension_cost(1).\n\nin(a) supported_with_weight(action(x), 2).\n")
        .assert()
        .success()
        .stdout(predicate::eq(
            "sequence,cost,a,b,action(x)\n1,1,0,1,0\n2,,1,0,2\n",
        ));
}

#[test]
fn test_convert_strict_mode_warns() {
    Command::cargo_bin("asptab")
        .unwrap()
        .arg("convert")
        .arg("--strict")
        .arg("--logging-level")
        .arg("warn")
        .write_stdin("Answer: 1\nin(a) extension_cost(high) supported_with_weight(action(x))\n")
        .assert()
        .success()
        .stdout(predicate::eq("sequence,cost,a\n1,high,1\n"))
        .stderr(
            predicate::str::contains(r#"value "high" is not an integer"#)
                .and(predicate::str::contains("no top-level comma")),
        );
}

#[test]
fn test_convert_lenient_mode_is_silent() {
    Command::cargo_bin("asptab")
        .unwrap()
        .arg("convert")
        .arg("--logging-level")
        .arg("warn")
        .write_stdin("Answer: 1\nin(a) extension_cost(high) supported_with_weight(action(x))\n")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_convert_additional_weight_predicate() {
    convert_cmd()
        .arg("--weight-predicate")
        .arg("weight_of_atom")
        .write_stdin("Answer: 1\nweight_of_atom(action(x), 4) supported_with_weight(action(y), 5)\n")
        .assert()
        .success()
        .stdout(predicate::eq("sequence,cost,action(x),action(y)\n1,,4,5\n"));
}

#[test]
fn test_convert_missing_input_file() {
    convert_cmd()
        .arg("-f")
        .arg("/this/file/does/not/exist")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_convert_pretty_json() {
    convert_cmd()
        .arg("--format")
        .arg("json")
        .arg("--pretty")
        .write_stdin("Answer: 1\nin(a) extension_cost(1)\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "{\n  \"columns\": [\n    \"sequence\",\n    \"cost\",\n    \"a\"\n  ],",
        ));
}

#[test]
fn test_convert_pretty_ignored_for_csv() {
    convert_cmd()
        .arg("--pretty")
        .write_stdin("Answer: 1\nin(a) extension_cost(1)\n")
        .assert()
        .success()
        .stdout(predicate::eq("sequence,cost,a\n1,1,1\n"));
}

#[test]
fn test_convert_negated_atoms_not_included() {
    convert_cmd()
        .write_stdin("Answer: 1\n-in(a) in(b)\nSATISFIABLE\n")
        .assert()
        .success()
        .stdout(predicate::eq("sequence,cost,b\n1,,1\n"));
}

#[test]
fn test_convert_atom_named_as_fixed_column() {
    convert_cmd()
        .write_stdin("Answer: 1\nin(cost) in(sequence) extension_cost(3)\n")
        .assert()
        .success()
        .stdout(predicate::eq(
            "sequence,cost,in(cost),in(sequence)\n1,3,1,1\n",
        ));
}
