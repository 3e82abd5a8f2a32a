// Trains a 3 -> 4 -> 4 -> 1 perceptron on four samples with plain gradient descent.
//
// Run with `RUST_LOG=info cargo run --example train_mlp`.

use log::info;
use scalargrad_core::nn::{sum_squared_error, Mlp, Module};
use scalargrad_core::{Scalar, ScalarGradError};

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();

    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let inputs: Vec<Vec<Scalar<f64>>> = xs
        .iter()
        .map(|row| row.iter().map(|&v| Scalar::new(v)).collect())
        .collect();
    let targets: Vec<Scalar<f64>> = ys.iter().map(|&v| Scalar::new(v)).collect();

    let mlp: Mlp<f64> = Mlp::new(3, &[4, 4, 1])?;
    info!("Model has {} parameters", mlp.parameters().len());

    let learning_rate = 0.05;
    for step in 0..100 {
        let predictions: Vec<Scalar<f64>> = inputs.iter().map(|x| mlp.apply(x)[0].clone()).collect();
        let loss = sum_squared_error(&targets, &predictions).with_label("loss");

        mlp.zero_grad();
        loss.backward();
        for p in mlp.parameters() {
            p.set_value(p.value() - learning_rate * p.grad());
        }

        if step % 10 == 0 {
            info!("step {:>3}: loss {:.6}", step, loss.value());
        }
    }

    for (x, y) in inputs.iter().zip(ys.iter()) {
        let prediction = mlp.apply(x)[0].value();
        println!("target {:>5.2}  prediction {:>8.4}", y, prediction);
    }
    Ok(())
}
