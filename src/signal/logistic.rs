use crate::config::{ITERATIONS, START};

/// Iterates `x(n+1) = rate * x(n) * (1 - x(n))` from `START`, recording
/// iterates 1 through `ITERATIONS`. The seed itself is not part of the output.
///
/// No bounds are enforced on `rate`; divergent rates run off to infinity and
/// then NaN under ordinary IEEE-754 rules.
pub fn logistic_map(rate: f64) -> [f64; ITERATIONS] {
    let mut series = [0.0; ITERATIONS];
    let mut x = START;

    for value in series.iter_mut() {
        x = rate * x * (1.0 - x);
        *value = x;
    }

    series
}

#[cfg(test)]
mod tests {
    use super::*;

    // Recorded from seed 0.1 at rate 3.5.
    const REFERENCE_3_5: [f64; ITERATIONS] = [
        0.31500000000000006, 0.7552125000000001, 0.6470330294531249,
        0.7993345088744278, 0.5613959812891678, 0.8618068671853906,
        0.416835268001226, 0.8507926957305024, 0.444305696177445,
        0.8641435058260233, 0.41089827507656534, 0.8472130891548401,
        0.4530507475184358, 0.8672851869199782, 0.40285557014204826,
        0.8419703591165073, 0.4656969572000446, 0.8708815543913254,
        0.39356405414296014, 0.8353498630033106, 0.48139164284281283,
        0.8737880516536869, 0.38598872354329244, 0.8295050009424927,
        0.49499259023860764, 0.8749122404661853, 0.3830428418201883,
        0.8271235810267586, 0.5004655695768039, 0.874999241357392,
        0.38281449143483154, 0.8269364480381299, 0.5008939563047391,
        0.8749972029474383, 0.3828198422355922, 0.8269408371920798,
        0.5008839114164969, 0.8749972654521273, 0.3828196781619937,
        0.8269407026087944, 0.5008842194218376, 0.8749972635460491,
        0.3828196831654124, 0.8269407067129099, 0.5008842100292207,
        0.8749972636041847, 0.3828196830128076, 0.8269407065877338,
        0.5008842103156969, 0.8749972636024116, 0.38281968301746205,
        0.8269407065915517, 0.5008842103069591, 0.8749972636024658,
        0.38281968301731983, 0.8269407065914351, 0.500884210307226,
        0.8749972636024641, 0.38281968301732416, 0.8269407065914387,
        0.5008842103072179, 0.8749972636024641, 0.38281968301732416,
        0.8269407065914387, 0.5008842103072179, 0.8749972636024641,
        0.38281968301732416, 0.8269407065914387, 0.5008842103072179,
        0.8749972636024641, 0.38281968301732416, 0.8269407065914387,
        0.5008842103072179, 0.8749972636024641, 0.38281968301732416,
        0.8269407065914387, 0.5008842103072179, 0.8749972636024641,
        0.38281968301732416, 0.8269407065914387, 0.5008842103072179,
        0.8749972636024641, 0.38281968301732416, 0.8269407065914387,
        0.5008842103072179, 0.8749972636024641, 0.38281968301732416,
        0.8269407065914387, 0.5008842103072179, 0.8749972636024641,
        0.38281968301732416, 0.8269407065914387, 0.5008842103072179,
        0.8749972636024641, 0.38281968301732416, 0.8269407065914387,
        0.5008842103072179, 0.8749972636024641, 0.38281968301732416,
        0.8269407065914387,
    ];

    #[test]
    fn first_iterates_follow_the_recurrence() {
        let series = logistic_map(3.5);

        let mut x = START;
        for (i, &value) in series.iter().enumerate().take(5) {
            x = 3.5 * x * (1.0 - x);
            assert_eq!(value.to_bits(), x.to_bits(), "iterate {} differs", i + 1);
        }

        // 3.5 * 0.1 * 0.9
        assert!((series[0] - 0.315).abs() < 1e-15);
        // 3.5 * 0.315 * 0.685
        assert!((series[1] - 0.7552125).abs() < 1e-12);
    }

    #[test]
    fn matches_recorded_reference() {
        let series = logistic_map(3.5);
        for (i, (got, want)) in series.iter().zip(REFERENCE_3_5.iter()).enumerate() {
            assert_eq!(got.to_bits(), want.to_bits(), "step {i}: {got} != {want}");
        }
    }

    #[test]
    fn same_rate_is_bit_identical() {
        let a = logistic_map(3.5);
        let b = logistic_map(3.5);
        assert!(a.iter().zip(b.iter()).all(|(x, y)| x.to_bits() == y.to_bits()));
    }

    #[test]
    fn rate_three_and_a_half_settles_into_period_four() {
        let series = logistic_map(3.5);

        // Cycle of r = 3.5: ~0.3828, ~0.8269, ~0.5009, ~0.8750
        let tail = &series[ITERATIONS - 8..];
        for i in 0..4 {
            assert!((tail[i] - tail[i + 4]).abs() < 1e-9);
        }
        let mut cycle: Vec<f64> = tail[..4].to_vec();
        cycle.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let expected = [0.38281968, 0.50088421, 0.82694071, 0.87499726];
        for (got, want) in cycle.iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-6, "got {got}, want {want}");
        }
    }

    #[test]
    fn zero_rate_collapses_to_zero() {
        assert!(logistic_map(0.0).iter().all(|&x| x == 0.0));
    }

    #[test]
    fn length_is_fixed_for_any_rate() {
        for rate in [-2.0, 0.0, 1.0, 3.9, 4.0, 10.0] {
            assert_eq!(logistic_map(rate).len(), ITERATIONS);
        }
    }

    #[test]
    fn divergent_rate_propagates_non_finite_values() {
        let series = logistic_map(10.0);
        assert!(series.iter().any(|x| !x.is_finite()));
    }

    #[test]
    fn stable_rate_converges_to_fixed_point() {
        // Fixed point is 1 - 1/r
        let series = logistic_map(2.5);
        assert!((series[ITERATIONS - 1] - 0.6).abs() < 1e-9);
    }
}
