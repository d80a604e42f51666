use contracts::domain::order::{Courier, OrderDraft};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::orders::api;
use crate::shared::components::ui::{Button, Input, Select};

/// The nine manually-entered order fields, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OrderField {
    ProductIds,
    Quantities,
    CustomerName,
    Phone,
    Address,
    CodAmount,
    DeliveryCharge,
    Advance,
    Discount,
}

impl OrderField {
    const ALL: [OrderField; 9] = [
        OrderField::ProductIds,
        OrderField::Quantities,
        OrderField::CustomerName,
        OrderField::Phone,
        OrderField::Address,
        OrderField::CodAmount,
        OrderField::DeliveryCharge,
        OrderField::Advance,
        OrderField::Discount,
    ];

    fn id(&self) -> &'static str {
        match self {
            OrderField::ProductIds => "product_ids",
            OrderField::Quantities => "s_product_qty",
            OrderField::CustomerName => "c_name",
            OrderField::Phone => "c_phone",
            OrderField::Address => "address",
            OrderField::CodAmount => "cod_amount",
            OrderField::DeliveryCharge => "delivery_charge",
            OrderField::Advance => "advance",
            OrderField::Discount => "discount_amount",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            OrderField::ProductIds => "Product IDs (comma separated)",
            OrderField::Quantities => "Quantities (comma separated)",
            OrderField::CustomerName => "Customer Name",
            OrderField::Phone => "Phone Number",
            OrderField::Address => "Delivery Address",
            OrderField::CodAmount => "COD Amount",
            OrderField::DeliveryCharge => "Delivery Charge",
            OrderField::Advance => "Advance Payment (Optional)",
            OrderField::Discount => "Discount Amount (Optional)",
        }
    }

    fn input_type(&self) -> &'static str {
        match self {
            OrderField::Phone => "tel",
            OrderField::CodAmount
            | OrderField::DeliveryCharge
            | OrderField::Advance
            | OrderField::Discount => "number",
            _ => "text",
        }
    }

    fn required(&self) -> bool {
        !matches!(self, OrderField::Advance | OrderField::Discount)
    }

    fn read(&self, draft: &OrderDraft) -> String {
        match self {
            OrderField::ProductIds => draft.product_ids.clone(),
            OrderField::Quantities => draft.s_product_qty.clone(),
            OrderField::CustomerName => draft.c_name.clone(),
            OrderField::Phone => draft.c_phone.clone(),
            OrderField::Address => draft.address.clone(),
            OrderField::CodAmount => draft.cod_amount.clone(),
            OrderField::DeliveryCharge => draft.delivery_charge.clone(),
            OrderField::Advance => draft.advance.clone(),
            OrderField::Discount => draft.discount_amount.clone(),
        }
    }

    fn write(&self, draft: &mut OrderDraft, value: String) {
        match self {
            OrderField::ProductIds => draft.product_ids = value,
            OrderField::Quantities => draft.s_product_qty = value,
            OrderField::CustomerName => draft.c_name = value,
            OrderField::Phone => draft.c_phone = value,
            OrderField::Address => draft.address = value,
            OrderField::CodAmount => draft.cod_amount = value,
            OrderField::DeliveryCharge => draft.delivery_charge = value,
            OrderField::Advance => draft.advance = value,
            OrderField::Discount => draft.discount_amount = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct SubmitBanner {
    message: String,
    success: bool,
}

impl SubmitBanner {
    fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

fn courier_options() -> Vec<(String, String)> {
    Courier::all()
        .iter()
        .map(|c| (c.wire_value().to_string(), c.display_name().to_string()))
        .collect()
}

#[component]
pub fn PlaceOrder() -> impl IntoView {
    let draft = RwSignal::new(OrderDraft::default());
    let submitting = RwSignal::new(false);
    let banner = RwSignal::new(None::<SubmitBanner>);

    let submit = move || {
        banner.set(None);

        // Requirement check happens before anything touches the
        // network; an invalid draft issues no request at all.
        let request = match draft.get_untracked().to_request() {
            Ok(request) => request,
            Err(message) => {
                banner.set(Some(SubmitBanner::error(message)));
                return;
            }
        };

        submitting.set(true);
        spawn_local(async move {
            match api::create_order(&request).await {
                Ok(()) => {
                    banner.set(Some(SubmitBanner::success("Order placed successfully!")));
                }
                Err(message) => {
                    log::error!("Order submission failed: {}", message);
                    banner.set(Some(SubmitBanner::error(message)));
                }
            }
            submitting.set(false);
        });
    };

    let field_inputs = OrderField::ALL
        .iter()
        .map(|&field| {
            let placeholder = if field.required() { field.label() } else { "" };
            let step = if field.input_type() == "number" { "0.01" } else { "" };
            view! {
                <Input
                    id=field.id()
                    label=field.label()
                    input_type=field.input_type()
                    required=field.required()
                    placeholder=placeholder
                    step=step
                    value=Signal::derive(move || draft.with(|d| field.read(d)))
                    on_input=Callback::new(move |value: String| {
                        // Typing clears any stale success/error banner.
                        banner.set(None);
                        draft.update(|d| field.write(d, value));
                    })
                />
            }
        })
        .collect_view();

    view! {
        <div class="order-form">
            <h2 class="page__title">"Place Your Order"</h2>

            {move || banner.get().map(|b| {
                let class = if b.success {
                    "banner banner--success"
                } else {
                    "banner banner--error"
                };
                view! { <div class=class>{b.message}</div> }
            })}

            <form on:submit=move |ev| {
                ev.prevent_default();
                submit();
            }>
                {field_inputs}

                <Select
                    id="courier"
                    label="Courier"
                    required=true
                    options=Signal::derive(courier_options)
                    value=Signal::derive(move || {
                        draft.with(|d| d.courier.wire_value().to_string())
                    })
                    on_change=Callback::new(move |value: String| {
                        banner.set(None);
                        if let Some(courier) = Courier::from_wire(&value) {
                            draft.update(|d| d.courier = courier);
                        }
                    })
                />

                <Button
                    button_type="submit"
                    disabled=Signal::derive(move || submitting.get())
                >
                    {move || if submitting.get() { "Placing Order..." } else { "Place Order" }}
                </Button>
            </form>
        </div>
    }
}
