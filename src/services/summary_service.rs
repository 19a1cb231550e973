use serde::Serialize;

use crate::models::booking::BookingRecord;
use crate::services::pricing_service::{PricingService, ADD_ON_UNIT_PRICE};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineItem {
    pub label: String,
    pub amount: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BookingSummary {
    pub line_items: Vec<LineItem>,
    pub total: u32,
}

/// Read-only projection of the record into the itemized sidebar breakdown.
/// Safe to call at any step; before a service is chosen it renders the
/// empty "no services selected yet" state.
pub struct SummaryService;

impl SummaryService {
    pub fn project(record: &BookingRecord) -> BookingSummary {
        let mut line_items = Vec::new();

        if let Some(service) = record.service {
            let label = match record.frequency {
                Some(frequency) => {
                    format!("{} ({})", service.display_name(), frequency.display_name())
                }
                None => service.display_name().to_string(),
            };
            line_items.push(LineItem {
                label,
                amount: PricingService::base_price(service),
            });

            if let Some(bedrooms) = record.bedrooms {
                if bedrooms > 1 {
                    let extra = bedrooms - 1;
                    let label = if extra == 1 {
                        "1 additional bedroom".to_string()
                    } else {
                        format!("{} additional bedrooms", extra)
                    };
                    line_items.push(LineItem {
                        label,
                        amount: PricingService::bedroom_surcharge(bedrooms),
                    });
                }
            }

            for add_on in &record.add_ons {
                line_items.push(LineItem {
                    label: add_on.display_name().to_string(),
                    amount: ADD_ON_UNIT_PRICE,
                });
            }
        }

        BookingSummary {
            line_items,
            total: PricingService::quote(record),
        }
    }
}
