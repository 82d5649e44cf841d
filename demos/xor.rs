use glyph_nn::Network;

fn main() -> glyph_nn::Result<()> {
    let mut network = Network::with_learning_rate(2, 4, 1, 0.3)?;

    let samples = [
        ([0.0, 0.0], [0.0]),
        ([0.0, 1.0], [1.0]),
        ([1.0, 0.0], [1.0]),
        ([1.0, 1.0], [0.0]),
    ];

    let iterations = 5000;

    for i in 0..iterations {
        let (input, target) = &samples[i % samples.len()];
        let loss = network.train(input, target)?;
        if i % 500 == 0 {
            println!("Iteration {i}: loss = {loss:.6}");
        }
    }

    for (input, _) in &samples {
        println!("Input: {:?} -> Output: {:.4}", input, network.predict(input)?[0]);
    }

    Ok(())
}
