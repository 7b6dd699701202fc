use anyhow::Context;
use vector_algebra::{
    utils::generate_random_vectors,
    vector::Vector,
    AngleUnit, Degeneracy, VectorError,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Vector Algebra Demo");
    println!("===================\n");

    let a = Vector::new([3.0, 4.0, 0.0]).context("Failed to build vector a")?;
    let b = Vector::new([4.0, -3.0, 5.0]).context("Failed to build vector b")?;
    println!("a = {}", a);
    println!("b = {}", b);

    println!("\nBasics:");
    println!("  a + b        = {}", a.plus(&b)?);
    println!("  a - b        = {}", a.minus(&b)?);
    println!("  |a|          = {}", a.magnitude());
    println!("  a normalized = {}", a.normalized()?);
    println!("  a . b        = {}", a.dot(&b)?);
    println!(
        "  angle(a, b)  = {:.4} rad / {:.2} deg",
        a.angle(&b, AngleUnit::Radians)?,
        a.angle(&b, AngleUnit::Degrees)?
    );

    println!("\nDecomposition of b onto a:");
    let parallel = b.component_parallel(&a)?;
    let orthogonal = b.component_orthogonal(&a)?;
    println!("  parallel     = {}", parallel);
    println!("  orthogonal   = {}", orthogonal);
    println!("  orthogonal to a? {}", orthogonal.is_orthogonal(&a)?);

    println!("\nCross products:");
    println!("  a x b        = {}", a.cross(&b)?);
    println!("  triangle(a, b) area = {:.4}", a.area_triangle(&b)?);
    let planar = Vector::new([1.0, 0.0])?.cross(&Vector::new([0.0, 2.0])?)?;
    println!("  (1, 0) x (0, 2) = {}", planar);

    println!("\nDegenerate inputs:");
    let zero = Vector::new([0.0, 0.0, 0.0])?;
    match a.angle(&zero, AngleUnit::Radians) {
        Err(VectorError::DegenerateVector(Degeneracy::Angle)) => {
            println!("  angle with the zero vector is undefined, as expected")
        }
        other => anyhow::bail!("unexpected angle result: {:?}", other),
    }
    if let Err(err) = Vector::new([1.0, 2.0, 3.0, 4.0])?.cross(&Vector::new([4.0, 3.0, 2.0, 1.0])?) {
        println!("  4D cross product: {}", err);
    }

    println!("\nRandom sample:");
    let samples = generate_random_vectors(3, 4).context("Failed to generate samples")?;
    for pair in samples.chunks(2) {
        println!(
            "  {} vs {} -> parallel: {}, area: {:.4}",
            pair[0],
            pair[1],
            pair[0].is_parallel(&pair[1])?,
            pair[0].area_parallelogram(&pair[1])?
        );
    }

    println!("\nDemo completed successfully!");
    Ok(())
}
