//! End-to-end tests of the `recast` binary: artifact naming, description
//! sidecars, exit codes.

use assert_cmd::Command;
use predicates::prelude::*;

const DOMAIN: &str = "\
;; single-action test domain
(define (domain coin)
  (:requirements :probabilistic-effects)
  (:predicates (heads) (tails))
  (:action flip
    :parameters ()
    :effect (probabilistic 1/3 (and (heads)) 1/3 (and (tails)))))
";

const DOMAIN_WITH_PROBLEM: &str = "\
(define (domain coin)
  (:predicates (heads))
  (:action flip
    :parameters ()
    :effect (probabilistic 1/2 (and (heads)))))
(define (problem flip-once)
  (:domain coin)
  (:init)
  (:goal (heads))
  (:goal-reward 100)
  (:metric maximize (reward)))
";

fn recast() -> Command {
    Command::cargo_bin("recast").expect("binary builds")
}

fn write_input(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write test input");
    path
}

#[test]
fn determinize_all_writes_numbered_artifact_pairs() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "coin.ppddl", DOMAIN);
    let prefix = dir.path().join("out");

    recast()
        .arg("determinize")
        .arg(&input)
        .arg("-o")
        .arg(&prefix)
        .assert()
        .success()
        .stdout(predicate::str::contains("created 3 determinization(s)"));

    for idx in 0..3 {
        let pddl = dir.path().join(format!("out_det{}.pddl", idx));
        let desc = dir.path().join(format!("out_det{}.desc", idx));
        assert!(pddl.exists(), "missing {}", pddl.display());
        let desc_text = std::fs::read_to_string(&desc).unwrap();
        assert_eq!(desc_text, format!("flip {}\n", idx));
        let pddl_text = std::fs::read_to_string(&pddl).unwrap();
        assert!(!pddl_text.contains("probabilistic"));
        assert!(!pddl_text.contains(":requirements"));
    }
    assert!(!dir.path().join("out_det3.pddl").exists());
}

#[test]
fn determinize_respects_the_limit() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "coin.ppddl", DOMAIN);
    let prefix = dir.path().join("out");

    recast()
        .arg("determinize")
        .arg(&input)
        .arg("-o")
        .arg(&prefix)
        .args(["--limit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("created 2 determinization(s)"));

    assert!(dir.path().join("out_det1.pddl").exists());
    assert!(!dir.path().join("out_det2.pddl").exists());
}

#[test]
fn determinize_mlo_writes_a_single_pair() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "coin.ppddl", DOMAIN);
    let prefix = dir.path().join("out");

    recast()
        .arg("determinize")
        .arg(&input)
        .arg("-o")
        .arg(&prefix)
        .args(["--mode", "mlo"])
        .assert()
        .success();

    // 1/3 + 1/3 explicit, leftover 1/3: first outcome wins the tie.
    let desc = std::fs::read_to_string(dir.path().join("out_mlo_det.desc")).unwrap();
    assert_eq!(desc, "flip 0\n");
    assert!(dir.path().join("out_mlo_det.pddl").exists());
}

#[test]
fn reduce_prints_the_gated_model_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        &dir,
        "walk.ppddl",
        "(define (domain walk)\n\
           (:predicates (ahead) (fallen))\n\
           (:action step\n\
             :parameters ()\n\
             :effect (probabilistic 9/10 (and (ahead) (primary)) 1/10 (and (fallen)))))\n",
    );

    recast()
        .arg("reduce")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("k-0").and(predicate::str::contains("k-1")));
}

#[test]
fn problem_extraction_strips_reward_and_metric() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "both.ppddl", DOMAIN_WITH_PROBLEM);

    recast()
        .arg("problem")
        .arg(&input)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("flip-once")
                .and(predicate::str::contains(":goal-reward").not())
                .and(predicate::str::contains(":metric").not()),
        );
}

#[test]
fn json_output_summarizes_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "coin.ppddl", DOMAIN);
    let prefix = dir.path().join("out");

    recast()
        .arg("determinize")
        .arg(&input)
        .arg("-o")
        .arg(&prefix)
        .args(["--output", "json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"count\":3")
                .and(predicate::str::contains("\"stem\""))
                .and(predicate::str::contains("\"action\":\"flip\"")),
        );
}

#[test]
fn missing_named_domain_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "coin.ppddl", DOMAIN);
    let prefix = dir.path().join("out");

    recast()
        .arg("determinize")
        .arg(&input)
        .arg("-o")
        .arg(&prefix)
        .args(["--domain", "elsewhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no domain named 'elsewhere'"));
}

#[test]
fn unbalanced_input_exits_nonzero_with_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "broken.ppddl", "(define (domain broken)");

    recast()
        .arg("fmt")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unbalanced '('"));
}

#[test]
fn json_output_reports_structured_errors() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "coin.ppddl", DOMAIN);
    let prefix = dir.path().join("out");

    recast()
        .arg("determinize")
        .arg(&input)
        .arg("-o")
        .arg(&prefix)
        .args(["--domain", "elsewhere", "--output", "json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("\"kind\":\"lookup\""));
}
