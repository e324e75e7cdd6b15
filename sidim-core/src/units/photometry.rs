//! Photometric units.

use crate::kinds::{IlluminanceDim, LuminosityDim, LuminousFluxDim};

define_unit! {
    /// Candela (SI base unit).
    Candela, "cd", LuminosityDim, 1.0 => candelas
}

define_unit! {
    /// Lumen, `cd·sr`. The steradian is dimensionless.
    Lumen, "lm", LuminousFluxDim, 1.0 => lumens
}

define_unit! {
    /// Lux, one lumen per square metre.
    Lux, "lx", IlluminanceDim, 1.0 => lux
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::Illuminance;
    use crate::units::length::meters;
    use crate::Unit;

    #[test]
    fn lux_is_lumen_per_square_meter() {
        let e: Illuminance = lumens(800.0) / (meters(2.0) * meters(2.0));
        assert_eq!(e.value_in::<Lux>(), 200.0);
        assert_eq!(lux(200.0), e);
    }

    #[test]
    fn lumen_and_candela_share_a_dimension() {
        assert_eq!(lumens(3.0), candelas(3.0));
        assert_eq!(Lumen::SYMBOL, "lm");
        assert_eq!(Candela::SYMBOL, "cd");
    }
}
