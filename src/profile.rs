// Copyright (c) 2024  The cswsavings developers

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

/*!
Tipologías de edificio
======================

Building type capabilities used by the key builder and the savings engine:

- bracket semantics (operating hours or occupancy) and default schedule
- size classification
- HVAC system to HVAC/fuel class mapping
- fuel of the coefficient rows
- savings retention policy when no cooling is installed
*/

use crate::{
    defaults::{LARGE_OFFICE_AREA_THRESHOLD, OCCUPANCY_DEFAULT, OPERATING_HOURS_DEFAULT},
    error::{CswError, Result},
    interpolation::{hours_brackets, occupancy_brackets},
    types::{BuildingType, Fuel, HeatingFuel, HvacFuelClass, HvacSystem, SavingsInput, Schedule, SizeClass},
};

/// How cooling savings are retained when no cooling system is installed
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum NoCoolingPolicy {
    /// Cubic polynomial of CDD from the no-cooling curve table, clamped to [0, 1]
    Curve,
    /// Static multiplier stored in each coefficient row
    RowMultiplier,
}

/// Building type dependent rules of the calculation
pub trait BuildingProfile {
    /// Building type described by the profile
    fn building_type(&self) -> BuildingType;

    /// Bracket endpoints (high, low) enclosing the schedule value
    ///
    /// # Errors
    ///
    /// A schedule of the wrong kind for the building type
    fn brackets(&self, schedule: Schedule) -> Result<(u32, u32)>;

    /// Schedule used when the input gives none
    fn default_schedule(&self) -> Schedule;

    /// Size class of the building
    fn size_class(&self, input: &SavingsInput) -> SizeClass;

    /// HVAC and fuel class, `None` for systems not covered by the table
    fn hvac_fuel_class(&self, input: &SavingsInput, size: SizeClass) -> Option<HvacFuelClass>;

    /// Heating fuel of the coefficient rows
    fn fuel(&self, input: &SavingsInput) -> Fuel {
        declared_fuel(input.heating_fuel)
    }

    /// Savings retention policy without cooling
    fn no_cooling_policy(&self, size: SizeClass) -> NoCoolingPolicy;
}

/// Office buildings, simulated at 2080, 2912 and 8760 operating hours
#[derive(Debug, Copy, Clone, Default)]
pub struct OfficeProfile;

/// Hotel buildings, simulated at 33 % and 100 % occupancy
#[derive(Debug, Copy, Clone, Default)]
pub struct HotelProfile;

static OFFICE_PROFILE: OfficeProfile = OfficeProfile;
static HOTEL_PROFILE: HotelProfile = HotelProfile;

/// Profile of a building type
pub fn profile_for(building_type: BuildingType) -> &'static dyn BuildingProfile {
    match building_type {
        BuildingType::Office => &OFFICE_PROFILE,
        BuildingType::Hotel => &HOTEL_PROFILE,
    }
}

/// Fuel of the declared heating fuel. No heating counts as electric.
pub fn declared_fuel(heating_fuel: HeatingFuel) -> Fuel {
    match heating_fuel {
        HeatingFuel::NaturalGas => Fuel::NaturalGas,
        HeatingFuel::Electric | HeatingFuel::NoHeating => Fuel::Electric,
    }
}

impl BuildingProfile for OfficeProfile {
    fn building_type(&self) -> BuildingType {
        BuildingType::Office
    }

    fn brackets(&self, schedule: Schedule) -> Result<(u32, u32)> {
        match schedule {
            Schedule::Hours(hours) => Ok(hours_brackets(hours)),
            Schedule::Occupancy(_) => Err(CswError::WrongInput(
                "office buildings need annual operating hours, not occupancy".into(),
            )),
        }
    }

    fn default_schedule(&self) -> Schedule {
        Schedule::Hours(OPERATING_HOURS_DEFAULT)
    }

    fn size_class(&self, input: &SavingsInput) -> SizeClass {
        if input.building_area > LARGE_OFFICE_AREA_THRESHOLD
            && input.hvac_system == HvacSystem::BuiltUpVavHydronicReheat
        {
            SizeClass::Large
        } else {
            SizeClass::Mid
        }
    }

    fn hvac_fuel_class(&self, input: &SavingsInput, size: SizeClass) -> Option<HvacFuelClass> {
        match size {
            SizeClass::Large => Some(HvacFuelClass::Vav),
            _ => match declared_fuel(input.heating_fuel) {
                Fuel::Electric => Some(HvacFuelClass::PvavElec),
                Fuel::NaturalGas => Some(HvacFuelClass::PvavGas),
            },
        }
    }

    fn no_cooling_policy(&self, _size: SizeClass) -> NoCoolingPolicy {
        NoCoolingPolicy::Curve
    }
}

impl BuildingProfile for HotelProfile {
    fn building_type(&self) -> BuildingType {
        BuildingType::Hotel
    }

    fn brackets(&self, schedule: Schedule) -> Result<(u32, u32)> {
        match schedule {
            Schedule::Occupancy(_) => Ok(occupancy_brackets()),
            Schedule::Hours(_) => Err(CswError::WrongInput(
                "hotel buildings need an occupancy rate, not operating hours".into(),
            )),
        }
    }

    fn default_schedule(&self) -> Schedule {
        Schedule::Occupancy(OCCUPANCY_DEFAULT)
    }

    fn size_class(&self, input: &SavingsInput) -> SizeClass {
        match input.hvac_system {
            HvacSystem::Ptac | HvacSystem::Pthp => SizeClass::Small,
            _ => SizeClass::Large,
        }
    }

    fn hvac_fuel_class(&self, input: &SavingsInput, _size: SizeClass) -> Option<HvacFuelClass> {
        match input.hvac_system {
            HvacSystem::Ptac => Some(HvacFuelClass::Ptac),
            HvacSystem::Pthp => Some(HvacFuelClass::Pthp),
            HvacSystem::FanCoilUnit => Some(HvacFuelClass::Fcu),
            _ => None,
        }
    }

    fn fuel(&self, input: &SavingsInput) -> Fuel {
        // Heat pumps only burn electricity
        if input.hvac_system == HvacSystem::Pthp {
            Fuel::Electric
        } else {
            declared_fuel(input.heating_fuel)
        }
    }

    fn no_cooling_policy(&self, _size: SizeClass) -> NoCoolingPolicy {
        NoCoolingPolicy::RowMultiplier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn profile_lookup() {
        assert_eq!(profile_for(BuildingType::Office).building_type(), BuildingType::Office);
        assert_eq!(profile_for(BuildingType::Hotel).building_type(), BuildingType::Hotel);
    }

    #[test]
    fn office_brackets() {
        let office = profile_for(BuildingType::Office);
        assert_eq!(office.brackets(Schedule::Hours(8000.0)), Ok((8760, 2912)));
        assert_eq!(office.brackets(Schedule::Hours(2912.0)), Ok((2912, 2080)));
        assert_eq!(office.brackets(Schedule::Hours(2500.0)), Ok((2912, 2080)));
        assert!(office.brackets(Schedule::Occupancy(50.0)).is_err());
    }

    #[test]
    fn hotel_brackets() {
        let hotel = profile_for(BuildingType::Hotel);
        assert_eq!(hotel.brackets(Schedule::Occupancy(66.0)), Ok((100, 33)));
        assert_eq!(hotel.brackets(Schedule::Occupancy(20.0)), Ok((100, 33)));
        assert!(hotel.brackets(Schedule::Hours(8760.0)).is_err());
    }

    #[test]
    fn default_schedules() {
        assert_eq!(
            profile_for(BuildingType::Office).default_schedule(),
            Schedule::Hours(8000.0)
        );
        assert_eq!(
            profile_for(BuildingType::Hotel).default_schedule(),
            Schedule::Occupancy(66.0)
        );
    }

    #[test]
    fn no_cooling_policies() {
        let office = profile_for(BuildingType::Office);
        assert_eq!(office.no_cooling_policy(SizeClass::Mid), NoCoolingPolicy::Curve);
        assert_eq!(office.no_cooling_policy(SizeClass::Large), NoCoolingPolicy::Curve);
        assert_eq!(
            profile_for(BuildingType::Hotel).no_cooling_policy(SizeClass::Small),
            NoCoolingPolicy::RowMultiplier
        );
    }

    #[test]
    fn declared_fuels() {
        assert_eq!(declared_fuel(HeatingFuel::NoHeating), Fuel::Electric);
        assert_eq!(declared_fuel(HeatingFuel::Electric), Fuel::Electric);
        assert_eq!(declared_fuel(HeatingFuel::NaturalGas), Fuel::NaturalGas);
    }
}
