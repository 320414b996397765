use wasm_bindgen::prelude::*;
use crate::rational::Rational;

/// JavaScript handle around a [`Rational`].
///
/// Constructor errors surface as the error's message string.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy)]
pub struct JsRational {
    inner: Rational,
}

impl From<Rational> for JsRational {
    fn from(inner: Rational) -> Self {
        JsRational { inner }
    }
}

impl JsRational {
    pub fn rational(&self) -> Rational {
        self.inner
    }
}

#[wasm_bindgen]
impl JsRational {
    #[wasm_bindgen(constructor)]
    pub fn new(numerator: i64, denominator: i64) -> Result<JsRational, String> {
        Rational::new(numerator, denominator)
            .map(JsRational::from)
            .map_err(|e| e.to_string())
    }

    #[wasm_bindgen(js_name = fromDecimal)]
    pub fn from_decimal(value: f64) -> Result<JsRational, String> {
        Rational::from_decimal(value)
            .map(JsRational::from)
            .map_err(|e| e.to_string())
    }

    #[wasm_bindgen]
    pub fn parse(text: &str) -> Result<JsRational, String> {
        Rational::parse(text)
            .map(JsRational::from)
            .map_err(|e| e.to_string())
    }

    #[wasm_bindgen(getter)]
    pub fn numerator(&self) -> i64 {
        self.inner.numerator()
    }

    #[wasm_bindgen(getter)]
    pub fn denominator(&self) -> i64 {
        self.inner.denominator()
    }

    #[wasm_bindgen(js_name = toDecimal)]
    pub fn to_decimal(&self) -> f64 {
        self.inner.to_decimal()
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_js_string(&self) -> String {
        self.inner.to_string()
    }

    #[wasm_bindgen]
    pub fn simplify(&mut self) {
        self.inner.simplify();
    }

    #[wasm_bindgen]
    pub fn simplified(&self) -> JsRational {
        self.inner.simplified().into()
    }

    #[wasm_bindgen]
    pub fn increment(&mut self) {
        self.inner.increment();
    }

    #[wasm_bindgen]
    pub fn decrement(&mut self) {
        self.inner.decrement();
    }

    #[wasm_bindgen]
    pub fn add(&self, other: &JsRational) -> JsRational {
        (self.inner + other.inner).into()
    }

    #[wasm_bindgen]
    pub fn sub(&self, other: &JsRational) -> JsRational {
        (self.inner - other.inner).into()
    }

    #[wasm_bindgen]
    pub fn mul(&self, other: &JsRational) -> JsRational {
        (self.inner * other.inner).into()
    }

    #[wasm_bindgen]
    pub fn div(&self, other: &JsRational) -> Result<JsRational, String> {
        self.inner
            .try_div(&other.inner)
            .map(JsRational::from)
            .map_err(|e| e.to_string())
    }

    #[wasm_bindgen]
    pub fn pow(&self, exponent: &JsRational) -> Result<JsRational, String> {
        self.inner
            .pow(&exponent.inner)
            .map(JsRational::from)
            .map_err(|e| e.to_string())
    }

    #[wasm_bindgen]
    pub fn neg(&self) -> JsRational {
        (-self.inner).into()
    }

    /// Decimal equality, same as `==` on the Rust side.
    #[wasm_bindgen]
    pub fn equals(&self, other: &JsRational) -> bool {
        self.inner == other.inner
    }

    /// Exact ordering: -1, 0 or 1.
    #[wasm_bindgen]
    pub fn compare(&self, other: &JsRational) -> i32 {
        self.inner.exact_cmp(&other.inner) as i32
    }
}
