//! Scripted demonstration of the fleet model.
//!
//! Builds a small sample fleet, walks it through loads, boarding, a
//! transfer, a replacement, and a discharge, printing a manifest after each
//! stage. Expected rejections are printed and the script continues.

use anyhow::Result;

use stowage_lib::{
    describe_container, Container, ContainerKind, ContainerSpec, SerialAllocator, Ship,
    ShipManifest,
};

/// Run the demonstration sequence.
///
/// Any failure that escapes the script is printed here and the process still
/// exits zero.
pub fn run() -> Result<()> {
    if let Err(err) = script() {
        println!("Error: {err}");
    }
    Ok(())
}

fn script() -> Result<()> {
    let serials = SerialAllocator::new();

    let mut milk_tank = Container::new(
        &serials,
        ContainerSpec {
            height_cm: 200.0,
            tare_kg: 500.0,
            depth_cm: 100.0,
            capacity_kg: 2000.0,
        },
        ContainerKind::Liquid { hazardous: false },
    )?;
    let mut fuel_tank = Container::new(
        &serials,
        ContainerSpec {
            height_cm: 200.0,
            tare_kg: 500.0,
            depth_cm: 100.0,
            capacity_kg: 2000.0,
        },
        ContainerKind::Liquid { hazardous: true },
    )?;
    let mut helium_tank = Container::new(
        &serials,
        ContainerSpec {
            height_cm: 150.0,
            tare_kg: 400.0,
            depth_cm: 90.0,
            capacity_kg: 1500.0,
        },
        ContainerKind::Gas { pressure_bar: 2.5 },
    )?;
    let mut banana_reefer = Container::new(
        &serials,
        ContainerSpec {
            height_cm: 220.0,
            tare_kg: 600.0,
            depth_cm: 120.0,
            capacity_kg: 2500.0,
        },
        ContainerKind::Refrigerated { temperature_c: 14.0 },
    )?;

    milk_tank.load(1500.0, "Milk")?;
    fuel_tank.load(800.0, "Fuel")?;
    helium_tank.load(1200.0, "Helium")?;
    banana_reefer.load(2000.0, "Bananas")?;

    // A follow-up consignment that would push the tank past its fill limit.
    if let Err(err) = milk_tank.load(1000.0, "Milk") {
        println!("Load rejected: {err}");
    }

    let gas_serial = helium_tank.serial().clone();
    let reefer_serial = banana_reefer.serial().clone();

    let mut albatross = Ship::new("Albatross", 20.0, 10, 50.0)?;
    let mut petrel = Ship::new("Petrel", 18.0, 8, 40.0)?;

    albatross.add_containers(vec![milk_tank, helium_tank, banana_reefer, fuel_tank])?;

    println!();
    print!("{}", ShipManifest::from_ship(&albatross).render());

    Ship::transfer_container(&mut albatross, &mut petrel, &gas_serial)?;

    println!("\nAfter the transfer:");
    print!("{}", ShipManifest::from_ship(&albatross).render());
    println!();
    print!("{}", ShipManifest::from_ship(&petrel).render());

    let mut ice_cream_reefer = Container::new(
        &serials,
        ContainerSpec {
            height_cm: 220.0,
            tare_kg: 600.0,
            depth_cm: 120.0,
            capacity_kg: 2500.0,
        },
        ContainerKind::Refrigerated { temperature_c: 15.0 },
    )?;
    ice_cream_reefer.load(1375.0, "Ice cream")?;

    let displaced = albatross.replace_container(&reefer_serial, ice_cream_reefer)?;
    println!("\nAfter the swap (container {} went ashore):", displaced.serial());
    print!("{}", ShipManifest::from_ship(&albatross).render());

    petrel.unload_container(&gas_serial)?;
    println!("\nAfter discharging the helium:");
    println!("{}", describe_container(&petrel, &gas_serial));

    Ok(())
}
