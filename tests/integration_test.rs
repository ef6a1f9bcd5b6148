// Integration tests for the crane pipeline

use cranemover::crane::{Crane, MovePolicy, SimulationError};
use cranemover::extract;
use cranemover::parser::{self, Move};
use cranemover::pipeline;
use cranemover::yard::{Label, Stack, Yard};
use std::fs;
use std::path::Path;

const SAMPLE: &str = r#"    [D]
[N] [C]
[Z] [M] [P]
 1   2   3

move 1 from 2 to 1
move 3 from 1 to 3
move 2 from 2 to 1
move 1 from 1 to 2
"#;

fn labels(stack: &Stack) -> String {
    stack.iter().map(Label::as_char).collect()
}

#[test]
fn test_scenario_single_crate_at_a_time() {
    let solution =
        pipeline::solve(SAMPLE, MovePolicy::SingleCrateAtATime).expect("Simulation failed");
    assert_eq!(solution.message, "CMZ");
}

#[test]
fn test_scenario_bulk_preserve_order() {
    let solution =
        pipeline::solve(SAMPLE, MovePolicy::BulkPreserveOrder).expect("Simulation failed");
    assert_eq!(solution.message, "MCD");
}

#[test]
fn test_scenario_underflow_leaves_stacks_unchanged() {
    let manifest = parser::parse(SAMPLE).expect("Parsing failed");
    let before: Vec<String> = manifest.yard.stacks().iter().map(labels).collect();
    assert_eq!(before, vec!["ZN", "MCD", "P"]);

    for policy in MovePolicy::ALL {
        let mut yard = manifest.yard.clone();
        let moves = [Move::new(5, 3, 1, 1)];
        let err = Crane::new(policy)
            .apply(&mut yard, &moves)
            .expect_err("Move should underflow");

        assert_eq!(
            err,
            SimulationError::Underflow {
                move_index: 0,
                line: 1,
                stack: 3,
                requested: 5,
                available: 1,
            }
        );
        assert_eq!(yard, manifest.yard);
    }
}

#[test]
fn test_underflow_reports_move_index_mid_procedure() {
    let text = format!("{}move 5 from 3 to 1\nmove 1 from 1 to 2\n", SAMPLE);
    let err = pipeline::solve(&text, MovePolicy::SingleCrateAtATime).unwrap_err();
    assert_eq!(err.stage(), "simulate");
    assert_eq!(err.line(), Some(10));

    // Stack 3 holds Z, N, D after the sample procedure; 5 is still too many
    let message = err.to_string();
    assert!(message.contains("move 4"), "{}", message);
    assert!(message.contains("holds 4"), "{}", message);
}

#[test]
fn test_single_crate_moves_agree_across_policies() {
    let manifest = parser::parse(SAMPLE).expect("Parsing failed");
    let moves = [
        Move::new(1, 2, 1, 1),
        Move::new(1, 1, 3, 2),
        Move::new(1, 3, 2, 3),
        Move::new(1, 2, 2, 4),
        Move::new(1, 1, 3, 5),
    ];

    let mut single = manifest.yard.clone();
    let mut bulk = manifest.yard.clone();
    for (index, mv) in moves.iter().enumerate() {
        Crane::new(MovePolicy::SingleCrateAtATime)
            .execute(&mut single, index, mv)
            .expect("Single move failed");
        Crane::new(MovePolicy::BulkPreserveOrder)
            .execute(&mut bulk, index, mv)
            .expect("Bulk move failed");
        assert_eq!(single, bulk, "diverged at {}", mv);
    }
}

/// Small deterministic generator so procedures are reproducible
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: usize) -> usize {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 33) % bound as u64) as usize
    }
}

fn random_yard(rng: &mut Lcg, stack_count: usize) -> Yard {
    let stacks = (0..stack_count)
        .map(|_| {
            let depth = rng.next(6);
            (0..depth)
                .filter_map(|_| Label::new((b'A' + rng.next(26) as u8) as char))
                .collect()
        })
        .collect();
    Yard::new(stacks)
}

fn random_procedure(rng: &mut Lcg, yard: &Yard, length: usize) -> Vec<Move> {
    // Track depths only, which is all that decides whether a move is legal
    let mut depths: Vec<usize> = yard.stacks().iter().map(Stack::depth).collect();
    let mut moves = Vec::new();
    for line in 1..=length {
        let candidates: Vec<usize> = (0..depths.len()).filter(|&i| depths[i] > 0).collect();
        if candidates.is_empty() {
            break;
        }
        let source = candidates[rng.next(candidates.len())];
        let destination = rng.next(depths.len());
        let count = 1 + rng.next(depths[source]);
        depths[source] -= count;
        depths[destination] += count;
        moves.push(Move::new(count, source + 1, destination + 1, line));
    }
    moves
}

#[test]
fn test_conservation_over_generated_procedures() {
    let mut rng = Lcg(0x5eed);
    for round in 0..50 {
        let yard = random_yard(&mut rng, 1 + round % 9);
        let moves = random_procedure(&mut rng, &yard, 40);

        for policy in MovePolicy::ALL {
            let mut after = yard.clone();
            Crane::new(policy)
                .apply(&mut after, &moves)
                .expect("Generated procedure must be legal");
            assert_eq!(after.len(), yard.len());
            assert_eq!(after.total_crates(), yard.total_crates());
            assert_eq!(after.inventory(), yard.inventory());
        }
    }
}

#[test]
fn test_rendered_yard_parses_back() {
    let mut rng = Lcg(42);
    for stack_count in 1..=12 {
        let yard = random_yard(&mut rng, stack_count);
        let text = yard.to_string();

        let manifest = parser::parse(&text).expect("Rendered diagram must parse");
        assert_eq!(manifest.yard, yard);

        let tokens = text.matches('[').count();
        assert_eq!(manifest.yard.total_crates(), tokens);
    }
}

#[test]
fn test_empty_stack_after_procedure() {
    let text = "[A]    \n 1   2 \n\nmove 1 from 1 to 2\n";
    let solution = pipeline::solve(text, MovePolicy::SingleCrateAtATime).expect("Simulation failed");
    assert_eq!(solution.message, format!("{}A", extract::EMPTY_STACK_SENTINEL));
    assert_eq!(extract::top_of_each(&solution.yard)[0], None);
}

#[test]
fn test_demo_input() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/sample.txt");
    let source = fs::read_to_string(path).expect("Failed to read demo file");

    let single = pipeline::solve(&source, MovePolicy::SingleCrateAtATime).expect("Simulation failed");
    let bulk = pipeline::solve(&source, MovePolicy::BulkPreserveOrder).expect("Simulation failed");
    assert_eq!(single.message, "CMZ");
    assert_eq!(bulk.message, "MCD");
}
