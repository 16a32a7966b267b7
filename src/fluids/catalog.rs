use super::{AndradeCoefficients, FluidDefinition, FluidPhase, FluidType};

/// 전체 유체 정의 표를 돌려준다.
pub fn fluid_definitions() -> &'static [FluidDefinition] {
    FLUIDS
}

/// 유체 정의를 찾는다. 표에 없으면 일반(custom) 정의로 대체한다.
pub fn definition(fluid: FluidType) -> &'static FluidDefinition {
    FLUIDS
        .iter()
        .find(|d| d.fluid == fluid)
        .unwrap_or(&CUSTOM)
}

const fn andrade(a: f64, b: f64, c: f64) -> AndradeCoefficients {
    AndradeCoefficients { a, b, c }
}

const CUSTOM: FluidDefinition = FluidDefinition {
    fluid: FluidType::Custom,
    name: "Custom liquid",
    phase: FluidPhase::Liquid,
    reference_temp_c: 20.0,
    density_kg_m3: 1000.0,
    density_coeff: 0.0,
    specific_heat_j_kgk: 4000.0,
    specific_heat_coeff: 0.0,
    thermal_conductivity_w_mk: 0.5,
    conductivity_coeff: 0.0,
    viscosity: andrade(1.0e-3, 0.0, 0.0),
    min_temp_c: -50.0,
    max_temp_c: 400.0,
    molecular_weight: None,
    gamma: None,
    bulk_modulus_pa: Some(2.0e9),
    critical_temp_k: None,
    critical_pressure_pa: None,
};

const FLUIDS: &[FluidDefinition] = &[
    FluidDefinition {
        fluid: FluidType::Water,
        name: "Water",
        phase: FluidPhase::Liquid,
        reference_temp_c: 20.0,
        density_kg_m3: 998.2,
        density_coeff: -0.441,
        specific_heat_j_kgk: 4182.0,
        specific_heat_coeff: 0.06,
        thermal_conductivity_w_mk: 0.598,
        conductivity_coeff: 2.0,
        // μ = 2.414e-5·10^(247.8/(T-140))
        viscosity: andrade(2.414e-5, 570.58, -140.0),
        min_temp_c: 1.0,
        max_temp_c: 180.0,
        molecular_weight: Some(18.015),
        gamma: None,
        bulk_modulus_pa: Some(2.2e9),
        critical_temp_k: Some(647.096),
        critical_pressure_pa: Some(22.064e6),
    },
    FluidDefinition {
        fluid: FluidType::SeaWater,
        name: "Sea water",
        phase: FluidPhase::Liquid,
        reference_temp_c: 20.0,
        density_kg_m3: 1025.0,
        density_coeff: -0.42,
        specific_heat_j_kgk: 3993.0,
        specific_heat_coeff: 0.05,
        thermal_conductivity_w_mk: 0.596,
        conductivity_coeff: 1.9,
        viscosity: andrade(2.607e-5, 570.58, -140.0),
        min_temp_c: 0.0,
        max_temp_c: 90.0,
        molecular_weight: None,
        gamma: None,
        bulk_modulus_pa: Some(2.34e9),
        critical_temp_k: None,
        critical_pressure_pa: None,
    },
    FluidDefinition {
        fluid: FluidType::EthyleneGlycol50,
        name: "Ethylene glycol 50%",
        phase: FluidPhase::Liquid,
        reference_temp_c: 20.0,
        density_kg_m3: 1071.0,
        density_coeff: -0.56,
        specific_heat_j_kgk: 3300.0,
        specific_heat_coeff: 1.11,
        thermal_conductivity_w_mk: 0.38,
        conductivity_coeff: 0.877,
        viscosity: andrade(2.903e-5, 754.3, -140.0),
        min_temp_c: -30.0,
        max_temp_c: 120.0,
        molecular_weight: None,
        gamma: None,
        bulk_modulus_pa: Some(2.6e9),
        critical_temp_k: None,
        critical_pressure_pa: None,
    },
    FluidDefinition {
        fluid: FluidType::ThermalOil,
        name: "Thermal oil (mineral)",
        phase: FluidPhase::Liquid,
        reference_temp_c: 20.0,
        density_kg_m3: 870.0,
        density_coeff: -0.702,
        specific_heat_j_kgk: 1880.0,
        specific_heat_coeff: 1.92,
        thermal_conductivity_w_mk: 0.133,
        conductivity_coeff: -0.627,
        viscosity: andrade(5.528e-5, 901.3, -150.0),
        min_temp_c: 0.0,
        max_temp_c: 320.0,
        molecular_weight: None,
        gamma: None,
        bulk_modulus_pa: Some(1.6e9),
        critical_temp_k: None,
        critical_pressure_pa: None,
    },
    FluidDefinition {
        fluid: FluidType::CrudeOil,
        name: "Crude oil (30 API)",
        phase: FluidPhase::Liquid,
        reference_temp_c: 20.0,
        density_kg_m3: 876.0,
        density_coeff: -0.714,
        specific_heat_j_kgk: 1900.0,
        specific_heat_coeff: 2.3,
        thermal_conductivity_w_mk: 0.135,
        conductivity_coeff: -0.7,
        viscosity: andrade(1.686e-4, 642.5, -150.0),
        min_temp_c: 0.0,
        max_temp_c: 250.0,
        molecular_weight: None,
        gamma: None,
        bulk_modulus_pa: Some(1.5e9),
        critical_temp_k: None,
        critical_pressure_pa: None,
    },
    FluidDefinition {
        fluid: FluidType::LightHydrocarbon,
        name: "Light hydrocarbon (diesel/kerosene)",
        phase: FluidPhase::Liquid,
        reference_temp_c: 20.0,
        density_kg_m3: 830.0,
        density_coeff: -0.85,
        specific_heat_j_kgk: 1950.0,
        specific_heat_coeff: 2.2,
        thermal_conductivity_w_mk: 0.135,
        conductivity_coeff: -0.9,
        viscosity: andrade(1.064e-4, 500.1, -150.0),
        min_temp_c: -20.0,
        max_temp_c: 200.0,
        molecular_weight: None,
        gamma: None,
        bulk_modulus_pa: Some(1.4e9),
        critical_temp_k: None,
        critical_pressure_pa: None,
    },
    FluidDefinition {
        fluid: FluidType::Air,
        name: "Air",
        phase: FluidPhase::Gas,
        reference_temp_c: 20.0,
        density_kg_m3: 1.204,
        density_coeff: 0.0,
        specific_heat_j_kgk: 1005.0,
        specific_heat_coeff: 0.12,
        thermal_conductivity_w_mk: 0.0257,
        conductivity_coeff: 2.79,
        viscosity: andrade(4.626e-5, -275.0, 0.0),
        min_temp_c: -50.0,
        max_temp_c: 500.0,
        molecular_weight: Some(28.97),
        gamma: Some(1.4),
        bulk_modulus_pa: None,
        critical_temp_k: Some(132.5),
        critical_pressure_pa: Some(3.77e6),
    },
    FluidDefinition {
        fluid: FluidType::NaturalGas,
        name: "Natural gas (methane)",
        phase: FluidPhase::Gas,
        reference_temp_c: 20.0,
        density_kg_m3: 0.668,
        density_coeff: 0.0,
        specific_heat_j_kgk: 2220.0,
        specific_heat_coeff: 1.08,
        thermal_conductivity_w_mk: 0.0332,
        conductivity_coeff: 3.5,
        viscosity: andrade(2.945e-5, -288.7, 0.0),
        min_temp_c: -50.0,
        max_temp_c: 400.0,
        molecular_weight: Some(16.04),
        gamma: Some(1.31),
        bulk_modulus_pa: None,
        critical_temp_k: Some(190.6),
        critical_pressure_pa: Some(4.599e6),
    },
    FluidDefinition {
        fluid: FluidType::Nitrogen,
        name: "Nitrogen",
        phase: FluidPhase::Gas,
        reference_temp_c: 20.0,
        density_kg_m3: 1.165,
        density_coeff: 0.0,
        specific_heat_j_kgk: 1040.0,
        specific_heat_coeff: 0.1,
        thermal_conductivity_w_mk: 0.0259,
        conductivity_coeff: 2.6,
        viscosity: andrade(4.429e-5, -270.5, 0.0),
        min_temp_c: -150.0,
        max_temp_c: 500.0,
        molecular_weight: Some(28.01),
        gamma: Some(1.4),
        bulk_modulus_pa: None,
        critical_temp_k: Some(126.2),
        critical_pressure_pa: Some(3.396e6),
    },
    FluidDefinition {
        fluid: FluidType::Steam,
        name: "Steam (low pressure, superheated)",
        phase: FluidPhase::Gas,
        reference_temp_c: 150.0,
        density_kg_m3: 0.519,
        density_coeff: 0.0,
        specific_heat_j_kgk: 1980.0,
        specific_heat_coeff: 0.5,
        thermal_conductivity_w_mk: 0.0288,
        conductivity_coeff: 4.0,
        viscosity: andrade(5.459e-5, -569.8, 0.0),
        min_temp_c: 100.0,
        max_temp_c: 600.0,
        molecular_weight: Some(18.015),
        gamma: Some(1.33),
        bulk_modulus_pa: None,
        critical_temp_k: Some(647.096),
        critical_pressure_pa: Some(22.064e6),
    },
    CUSTOM,
];
