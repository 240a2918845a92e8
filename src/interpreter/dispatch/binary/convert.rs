use crate::{
    config::Config,
    error::EvalError,
    interpreter::{
        dispatch::{binary::core::BinaryRule, core::EvalResult},
        value::{core::Value, unit::Unit},
    },
};

/// `to`: expresses a quantity in another unit of the same base, as in
/// `2 inch in cm`.
pub struct To;

impl BinaryRule for To {
    const NAME: &'static str = "to";

    fn units(x: &Unit, y: &Unit, _config: &Config) -> Option<EvalResult<Value>> {
        if y.has_value() {
            return Some(Err(EvalError::invalid(Self::NAME,
                                               format!("target unit {y} must not have a value"))));
        }
        let converted = x.to(y).map(Value::Unit).ok_or_else(|| {
                                                    EvalError::dimensions(Self::NAME,
                                                                          format!("cannot convert {} ({}) to {} ({})",
                                                                                  x.name(),
                                                                                  x.base(),
                                                                                  y.name(),
                                                                                  y.base()))
                                                });
        Some(converted)
    }
}
