//! Optional transfer add-on costing.

use crate::models::activity::TransferOption;
use crate::models::pax::PaxCount;
use crate::models::pricing::TransferAddOn;
use crate::models::vehicle::PriceUnit;
use crate::numeric::safe_price;
use crate::services::pricing_service::PricingConfig;

pub struct TransferService;

impl TransferService {
    /// Cost of the transfer add-on. Zero when not included; otherwise the
    /// unit price once per vehicle or once per passenger.
    pub fn cost(addon: &TransferAddOn, pax: &PaxCount, config: &PricingConfig) -> f32 {
        if !addon.included {
            return 0.0;
        }
        let unit_price = safe_price(addon.unit_price, config.transfer_fallback_unit_price);
        match addon.unit {
            PriceUnit::PerVehicle => unit_price,
            PriceUnit::PerPerson => unit_price * pax.total() as f32,
        }
    }

    /// Lift a catalog transfer option into an add-on selection.
    pub fn from_option(option: &TransferOption, included: bool) -> TransferAddOn {
        TransferAddOn {
            included,
            unit: option.unit,
            unit_price: option.unit_price,
        }
    }
}
