/// Training sample for the donation volume predictor
#[derive(Debug, Clone, Copy)]
pub struct TrainingSample {
    pub time_of_day: f64,
    pub day_of_week: f64,
    pub donation_kg: f64,
}

/// Placeholder training set, five hand-written samples
pub const DEFAULT_TRAINING_SET: [TrainingSample; 5] = [
    TrainingSample { time_of_day: 1.0, day_of_week: 10.0, donation_kg: 5.0 },
    TrainingSample { time_of_day: 2.0, day_of_week: 20.0, donation_kg: 10.0 },
    TrainingSample { time_of_day: 3.0, day_of_week: 30.0, donation_kg: 15.0 },
    TrainingSample { time_of_day: 4.0, day_of_week: 40.0, donation_kg: 20.0 },
    TrainingSample { time_of_day: 5.0, day_of_week: 50.0, donation_kg: 25.0 },
];

/// Two-feature linear regression predicting donation volume in kg
///
/// Fitted once at startup by plain gradient descent on the mean squared
/// error. The training data is a placeholder, so predictive accuracy is not
/// a goal; the fit only has to reproduce the training targets.
#[derive(Debug, Clone, Copy)]
pub struct DonationPredictor {
    weights: [f64; 2],
    intercept: f64,
}

impl DonationPredictor {
    /// Fit the model on the given samples
    ///
    /// Starting from zero weights, gradient descent converges to the
    /// minimum-norm least squares solution even when the two features are
    /// collinear, as they are in the default training set. The learning
    /// rate must stay below the stability bound for the feature scale;
    /// the configured default is safe for day-of-week-sized inputs.
    pub fn fit(samples: &[TrainingSample], learning_rate: f64, iterations: u32) -> Self {
        let mut weights = [0.0f64; 2];
        let mut intercept = 0.0f64;
        let n = samples.len() as f64;

        if samples.is_empty() {
            return Self { weights, intercept };
        }

        for _ in 0..iterations {
            let mut grad_w = [0.0f64; 2];
            let mut grad_b = 0.0f64;

            for sample in samples {
                let predicted =
                    intercept + weights[0] * sample.time_of_day + weights[1] * sample.day_of_week;
                let residual = predicted - sample.donation_kg;
                grad_w[0] += residual * sample.time_of_day;
                grad_w[1] += residual * sample.day_of_week;
                grad_b += residual;
            }

            weights[0] -= learning_rate * 2.0 * grad_w[0] / n;
            weights[1] -= learning_rate * 2.0 * grad_w[1] / n;
            intercept -= learning_rate * 2.0 * grad_b / n;
        }

        Self { weights, intercept }
    }

    /// Fit on the built-in placeholder training set
    pub fn with_default_training(learning_rate: f64, iterations: u32) -> Self {
        Self::fit(&DEFAULT_TRAINING_SET, learning_rate, iterations)
    }

    /// Predict the expected donation volume in kg
    pub fn predict(&self, time_of_day: f64, day_of_week: f64) -> f64 {
        self.intercept + self.weights[0] * time_of_day + self.weights[1] * day_of_week
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEARNING_RATE: f64 = 0.0005;
    const ITERATIONS: u32 = 100_000;

    #[test]
    fn test_fit_reproduces_training_targets() {
        let predictor = DonationPredictor::with_default_training(LEARNING_RATE, ITERATIONS);

        for sample in &DEFAULT_TRAINING_SET {
            let predicted = predictor.predict(sample.time_of_day, sample.day_of_week);
            assert!(
                (predicted - sample.donation_kg).abs() < 0.05,
                "expected ~{} kg, predicted {}",
                sample.donation_kg,
                predicted
            );
        }
    }

    #[test]
    fn test_prediction_grows_with_features() {
        let predictor = DonationPredictor::with_default_training(LEARNING_RATE, ITERATIONS);

        let low = predictor.predict(1.0, 10.0);
        let high = predictor.predict(5.0, 50.0);
        assert!(high > low);
    }

    #[test]
    fn test_empty_training_set_predicts_zero() {
        let predictor = DonationPredictor::fit(&[], LEARNING_RATE, ITERATIONS);
        assert_eq!(predictor.predict(3.0, 30.0), 0.0);
    }
}
