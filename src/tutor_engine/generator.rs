use rand::{rngs::StdRng, SeedableRng};

use crate::settings::clamp_maximum;
use crate::tutor_engine::{
    drills,
    models::{Mode, Operation, OperationChoice, Problem, ProblemRequest},
    random::RandomRange,
};

/// Resolve the selector to a concrete operation. `Mix` is a fresh coin flip
/// every call.
pub fn resolve_operation<R: RandomRange + ?Sized>(rng: &mut R, choice: OperationChoice) -> Operation {
    match choice {
        OperationChoice::Add      => Operation::Add,
        OperationChoice::Subtract => Operation::Subtract,
        OperationChoice::Multiply => Operation::Multiply,
        OperationChoice::Divide   => Operation::Divide,
        OperationChoice::Mix      => if rng.int_in(0, 1) == 0 { Operation::Add } else { Operation::Subtract },
    }
}

/// Core dispatch: routes to the drill family for `mode`.
///
/// `maximum` is clamped into the settings range before any drawing, so a
/// caller-built request cannot blow up the candidate pools. The make-10 drill
/// falls back to a flash fact when no shortcut pair fits under the maximum.
pub fn generate<R: RandomRange + ?Sized>(
    rng: &mut R,
    mode: Mode,
    operation: OperationChoice,
    maximum: u32,
) -> Problem {
    let maximum = clamp_maximum(maximum);
    match mode {
        Mode::Decompose => drills::decompose::generate(rng, maximum),

        Mode::MakeTen => match drills::make_ten::generate(rng, maximum) {
            Some(problem) => problem,
            None => {
                tracing::debug!(maximum, "no make-10 pair fits, falling back to flash");
                generate(rng, Mode::Flash, operation, maximum)
            }
        },

        Mode::Flash | Mode::Visual | Mode::Word => {
            let op = resolve_operation(rng, operation);
            drills::arithmetic::generate(rng, op, maximum)
        }
    }
}

/// Generate one problem from a request, seeding from `rng_seed` when given.
pub fn generate_problem(request: ProblemRequest) -> Problem {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    let problem = generate(&mut rng, request.mode, request.operation, request.maximum);
    tracing::debug!(
        mode = request.mode.key(),
        operation = request.operation.key(),
        maximum = request.maximum,
        prompt = problem.prompt(),
        "generated problem"
    );
    problem
}
