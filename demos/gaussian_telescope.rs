use quasi_optics::prelude::*;

fn main() -> Result<(), OpticsError> {
    // Symmetric two-mirror telescope imaging one horn onto an identical one.
    let sweep = FrequencySweep::centered(250.0, 100.0, 101, "GHz")?;
    let tx = ElementOptions::new().comment("Tx");
    let horn = Horn::new(sweep, 22.64, 3.6, DEFAULT_HORN_FACTOR, &tx)?;

    let mm = ElementOptions::new();
    let z_offset = horn.z_offset_at(250.0, "GHz", "mm")?;
    let reduced = Element::free_space(160.0 - z_offset, &mm)?;
    let air = Element::free_space(160.0, &mm)?;
    let m1 = Element::mirror(16.0, &mm.clone().units("cm").comment("M1").radius(5.0))?;
    let m2 = Element::mirror(160.0, &mm.clone().comment("M2").radius(50.0))?;
    let elements = vec![reduced.clone(), m1, air.clone(), air, m2, reduced];

    let system = System::new(horn, elements, None, &SystemOptions::default().comment("telescope"))?;

    println!("frequency(GHz), coupling, coupling(dB)");
    let freqs = system.sweep().frequencies_in("GHz")?;
    for ((f, c), db) in freqs.iter().zip(system.coupling()).zip(system.coupling_db()) {
        println!("{:.6e}, {:.6e}, {:.6e}", f, c, db);
    }
    Ok(())
}
