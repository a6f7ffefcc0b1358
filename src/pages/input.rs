use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::components::Link;

use crate::components::notification::{FlashAction, FlashQueue, FlashStack, Severity};
use crate::utils::api::Api;
use crate::Route;

/// One input of the prediction form. Every field is required.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Field {
    Year,
    Month,
    Carrier,
    Airport,
    ArrFlights,
    ArrDel15,
    CarrierCt,
    WeatherCt,
    NasCt,
    SecurityCt,
    LateAircraftCt,
    ArrCancelled,
    ArrDiverted,
}

impl Field {
    pub const ALL: [Field; 13] = [
        Field::Year,
        Field::Month,
        Field::Carrier,
        Field::Airport,
        Field::ArrFlights,
        Field::ArrDel15,
        Field::CarrierCt,
        Field::WeatherCt,
        Field::NasCt,
        Field::SecurityCt,
        Field::LateAircraftCt,
        Field::ArrCancelled,
        Field::ArrDiverted,
    ];

    /// Key used in the prediction payload.
    pub fn key(self) -> &'static str {
        match self {
            Field::Year => "year",
            Field::Month => "month",
            Field::Carrier => "carrier",
            Field::Airport => "airport",
            Field::ArrFlights => "arr_flights",
            Field::ArrDel15 => "arr_del15",
            Field::CarrierCt => "carrier_ct",
            Field::WeatherCt => "weather_ct",
            Field::NasCt => "nas_ct",
            Field::SecurityCt => "security_ct",
            Field::LateAircraftCt => "late_aircraft_ct",
            Field::ArrCancelled => "arr_cancelled",
            Field::ArrDiverted => "arr_diverted",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Year => "Year",
            Field::Month => "Month",
            Field::Carrier => "Carrier code",
            Field::Airport => "Arrival airport",
            Field::ArrFlights => "Arriving flights",
            Field::ArrDel15 => "Flights delayed 15+ min",
            Field::CarrierCt => "Carrier delay count",
            Field::WeatherCt => "Weather delay count",
            Field::NasCt => "NAS delay count",
            Field::SecurityCt => "Security delay count",
            Field::LateAircraftCt => "Late aircraft count",
            Field::ArrCancelled => "Cancelled arrivals",
            Field::ArrDiverted => "Diverted arrivals",
        }
    }

    fn input_type(self) -> &'static str {
        match self {
            Field::Carrier | Field::Airport => "text",
            _ => "number",
        }
    }

    fn step(self) -> Option<&'static str> {
        match self {
            Field::Carrier | Field::Airport => None,
            Field::CarrierCt
            | Field::WeatherCt
            | Field::NasCt
            | Field::SecurityCt
            | Field::LateAircraftCt => Some("0.01"),
            _ => Some("1"),
        }
    }
}

/// The form's working copy of the user's input, keyed by field.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct PredictionDraft {
    values: HashMap<Field, String>,
}

impl PredictionDraft {
    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: Field, value: String) {
        self.values.insert(field, value);
    }

    /// Fields whose trimmed value is empty, in form order.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .iter()
            .copied()
            .filter(|field| self.value(*field).trim().is_empty())
            .collect()
    }

    /// Trimmed values keyed for the backend.
    pub fn to_payload(&self) -> Value {
        let mut map = serde_json::Map::new();
        for field in Field::ALL {
            map.insert(
                field.key().to_string(),
                Value::String(self.value(field).trim().to_string()),
            );
        }
        Value::Object(map)
    }
}

/// Predicted delay components in seconds, as returned by the backend.
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct PredictionResponse {
    pub arr_delay: f64,
    pub carrier_delay: f64,
    pub weather_delay: f64,
    pub nas_delay: f64,
    pub security_delay: f64,
    pub late_aircraft_delay: f64,
}

impl PredictionResponse {
    /// Labelled components converted to minutes for display.
    pub fn minutes(&self) -> [(&'static str, f64); 6] {
        [
            ("Overall arrival delay", self.arr_delay / 60.0),
            ("Carrier delay", self.carrier_delay / 60.0),
            ("Weather delay", self.weather_delay / 60.0),
            ("NAS delay", self.nas_delay / 60.0),
            ("Security delay", self.security_delay / 60.0),
            ("Late aircraft delay", self.late_aircraft_delay / 60.0),
        ]
    }
}

fn field_row(field: Field, draft: UseStateHandle<PredictionDraft>, invalid: bool) -> Html {
    let oninput = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.set(field, input.value());
            draft.set(next);
        })
    };

    html! {
        <div class={classes!("form-group", invalid.then_some("error"))}>
            <label for={field.key()}>{field.label()}</label>
            <input
                id={field.key()}
                name={field.key()}
                type={field.input_type()}
                step={field.step()}
                value={draft.value(field).to_string()}
                required=true
                {oninput}
            />
        </div>
    }
}

#[function_component(InputPage)]
pub fn input_page() -> Html {
    let draft = use_state(PredictionDraft::default);
    let invalid = use_state(Vec::<Field>::new);
    let submitting = use_state(|| false);
    let result = use_state(|| None::<PredictionResponse>);
    let flashes = use_reducer(FlashQueue::default);

    let on_dismiss = {
        let flashes = flashes.dispatcher();
        Callback::from(move |id: u32| flashes.dispatch(FlashAction::Dismiss(id)))
    };

    let onsubmit = {
        let draft = draft.clone();
        let invalid = invalid.clone();
        let submitting = submitting.clone();
        let result = result.clone();
        let flashes = flashes.dispatcher();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let missing = draft.missing_fields();
            if !missing.is_empty() {
                invalid.set(missing);
                flashes.dispatch(FlashAction::Push(
                    Severity::Error,
                    "Please fill in all required fields.".to_string(),
                ));
                return;
            }
            invalid.set(Vec::new());
            submitting.set(true);

            let payload = draft.to_payload();
            let submitting = submitting.clone();
            let result = result.clone();
            let flashes = flashes.clone();
            spawn_local(async move {
                let request = match Api::post("/api/predict").json(&payload) {
                    Ok(request) => request,
                    Err(err) => {
                        gloo_console::error!("failed to serialize prediction payload", err.to_string());
                        flashes.dispatch(FlashAction::Push(
                            Severity::Error,
                            "Could not build the prediction request.".to_string(),
                        ));
                        submitting.set(false);
                        return;
                    }
                };
                match request.send().await {
                    Ok(response) if response.ok() => {
                        match response.json::<PredictionResponse>().await {
                            Ok(prediction) => {
                                result.set(Some(prediction));
                                flashes.dispatch(FlashAction::Push(
                                    Severity::Success,
                                    "Prediction ready.".to_string(),
                                ));
                            }
                            Err(_) => {
                                flashes.dispatch(FlashAction::Push(
                                    Severity::Error,
                                    "Unexpected response from the prediction service.".to_string(),
                                ));
                            }
                        }
                    }
                    Ok(response) => {
                        log::warn!("prediction request failed with status {}", response.status());
                        flashes.dispatch(FlashAction::Push(
                            Severity::Error,
                            "Prediction failed! Please try again.".to_string(),
                        ));
                    }
                    Err(err) => {
                        gloo_console::error!("prediction request error", err.to_string());
                        flashes.dispatch(FlashAction::Push(
                            Severity::Error,
                            "Could not reach the prediction service.".to_string(),
                        ));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="input-page">
            <style>{INPUT_CSS}</style>
            <FlashStack messages={flashes.messages().to_vec()} on_dismiss={on_dismiss} />

            <nav class="top-nav">
                <Link<Route> to={Route::Landing} classes="nav-logo">{"DelayCast"}</Link<Route>>
            </nav>

            <main class="form-wrap">
                <h1>{"Predict arrival delays"}</h1>
                <p class="form-intro">
                    {"Enter the route and its recent arrival statistics; the model returns the expected delay broken down by cause."}
                </p>

                <form class="prediction-form" {onsubmit}>
                    <div class="form-grid">
                        { for Field::ALL.iter().map(|field| {
                            field_row(*field, draft.clone(), invalid.contains(field))
                        })}
                    </div>
                    <button type="submit" class="submit-btn" disabled={*submitting}>
                        {
                            if *submitting {
                                html! { <><i class="fas fa-spinner fa-spin"></i>{" Processing..."}</> }
                            } else {
                                html! { {"Predict delays"} }
                            }
                        }
                    </button>
                </form>

                {
                    if let Some(prediction) = &*result {
                        html! {
                            <section class="prediction-result">
                                <h2>{"Forecast"}</h2>
                                <div class="result-grid">
                                    { for prediction.minutes().iter().map(|(label, minutes)| {
                                        html! {
                                            <div class="result-card">
                                                <span class="result-value">{format!("{minutes:.1} min")}</span>
                                                <span class="result-label">{*label}</span>
                                            </div>
                                        }
                                    })}
                                </div>
                            </section>
                        }
                    } else {
                        html! {}
                    }
                }
            </main>
        </div>
    }
}

const INPUT_CSS: &str = r#"
    .input-page .top-nav {
        padding: 1rem 2rem;
        background: rgba(15, 20, 32, 0.9);
    }
    .input-page .nav-logo {
        font-size: 1.3rem;
        font-weight: 700;
        color: #7eb2ff;
    }
    .form-wrap {
        max-width: 860px;
        margin: 0 auto;
        padding: 2.5rem 1.5rem 4rem;
    }
    .form-intro {
        color: #b6c2d2;
        margin-bottom: 2rem;
    }
    .form-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
        gap: 1rem 1.5rem;
    }
    .form-group {
        display: flex;
        flex-direction: column;
        gap: 0.3rem;
    }
    .form-group label {
        font-size: 0.85rem;
        color: #b6c2d2;
    }
    .form-group input {
        padding: 0.6rem 0.8rem;
        border-radius: 8px;
        border: 1px solid rgba(126, 178, 255, 0.25);
        background: rgba(30, 40, 60, 0.7);
        color: #eee;
    }
    .form-group.error input {
        border-color: #ef4444;
    }
    .submit-btn {
        margin-top: 1.8rem;
        padding: 0.8rem 2rem;
        border: none;
        border-radius: 8px;
        background: #2563eb;
        color: #fff;
        font-size: 1rem;
        cursor: pointer;
    }
    .submit-btn:disabled {
        opacity: 0.7;
        cursor: wait;
    }
    .prediction-result {
        margin-top: 3rem;
    }
    .result-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
        gap: 1rem;
    }
    .result-card {
        background: rgba(30, 40, 60, 0.7);
        border: 1px solid rgba(126, 178, 255, 0.15);
        border-radius: 12px;
        padding: 1.2rem;
        display: flex;
        flex-direction: column;
        gap: 0.3rem;
        text-align: center;
    }
    .result-value {
        font-size: 1.5rem;
        font-weight: 700;
        color: #f59e0b;
    }
    .result-label {
        color: #b6c2d2;
        font-size: 0.9rem;
    }
"#;

#[cfg(test)]
mod tests {
    use super::{Field, PredictionDraft};

    fn filled_draft() -> PredictionDraft {
        let mut draft = PredictionDraft::default();
        for field in Field::ALL {
            draft.set(field, "1".to_string());
        }
        draft
    }

    #[test]
    fn empty_draft_is_missing_every_field() {
        let draft = PredictionDraft::default();
        assert_eq!(draft.missing_fields().len(), Field::ALL.len());
    }

    #[test]
    fn blank_fields_are_reported_exactly() {
        let mut draft = filled_draft();
        draft.set(Field::Carrier, String::new());
        draft.set(Field::WeatherCt, "   ".to_string());
        assert_eq!(
            draft.missing_fields(),
            vec![Field::Carrier, Field::WeatherCt]
        );
    }

    #[test]
    fn whitespace_padded_values_pass_validation() {
        let mut draft = filled_draft();
        draft.set(Field::Airport, "  ORD  ".to_string());
        assert!(draft.missing_fields().is_empty());
    }

    #[test]
    fn payload_contains_every_key_trimmed() {
        let mut draft = filled_draft();
        draft.set(Field::Carrier, " UA ".to_string());
        let payload = draft.to_payload();
        let object = payload.as_object().unwrap();
        assert_eq!(object.len(), Field::ALL.len());
        assert_eq!(object["carrier"], "UA");
        assert_eq!(object["arr_flights"], "1");
    }

    #[test]
    fn unset_fields_read_as_empty() {
        let draft = PredictionDraft::default();
        assert_eq!(draft.value(Field::Year), "");
    }
}
