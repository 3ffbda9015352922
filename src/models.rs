use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// 温标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Unit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Unit {
    pub const ALL: [Unit; 3] = [Unit::Celsius, Unit::Fahrenheit, Unit::Kelvin];

    /// 宽松解析：无法识别的标签按摄氏度处理
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Fahrenheit" => Unit::Fahrenheit,
            "Kelvin" => Unit::Kelvin,
            "Celsius" => Unit::Celsius,
            other => {
                tracing::debug!(tag = other, "unknown unit tag, falling back to Celsius");
                Unit::Celsius
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Unit::Celsius => "Celsius",
            Unit::Fahrenheit => "Fahrenheit",
            Unit::Kelvin => "Kelvin",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
            Unit::Kelvin => "K",
        }
    }

    /// 选择器中的下一个温标（循环）
    pub fn next(&self) -> Self {
        match self {
            Unit::Celsius => Unit::Fahrenheit,
            Unit::Fahrenheit => Unit::Kelvin,
            Unit::Kelvin => Unit::Celsius,
        }
    }

    /// 选择器中的上一个温标（循环）
    pub fn prev(&self) -> Self {
        match self {
            Unit::Celsius => Unit::Kelvin,
            Unit::Fahrenheit => Unit::Celsius,
            Unit::Kelvin => Unit::Fahrenheit,
        }
    }

    fn to_celsius(self, value: f64) -> f64 {
        match self {
            Unit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            Unit::Kelvin => value - 273.15,
            Unit::Celsius => value,
        }
    }

    fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            Unit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            Unit::Kelvin => celsius + 273.15,
            Unit::Celsius => celsius,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 严格解析失败
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitParseError(pub String);

impl fmt::Display for UnitParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown temperature unit '{}' (expected Celsius, Fahrenheit or Kelvin)",
            self.0
        )
    }
}

impl std::error::Error for UnitParseError {}

impl FromStr for Unit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "celsius" | "c" => Ok(Unit::Celsius),
            "fahrenheit" | "f" => Ok(Unit::Fahrenheit),
            "kelvin" | "k" => Ok(Unit::Kelvin),
            _ => Err(UnitParseError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Unit {
    type Error = UnitParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// 以摄氏度为中间值进行换算
///
/// 不做范围检查（负的开尔文也照常计算），NaN 原样传播。
pub fn convert(value: f64, source: Unit, target: Unit) -> f64 {
    target.from_celsius(source.to_celsius(value))
}

/// 按字符串标签换算，未知标签视为摄氏度
#[allow(dead_code)]
pub fn convert_tags(value: f64, source: &str, target: &str) -> f64 {
    convert(value, Unit::from_tag(source), Unit::from_tag(target))
}

/// 换算请求（convert action 的载荷）
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertRequest {
    pub raw_input: String,
    pub temperature: f64,
    pub from_unit: Unit,
    pub to_unit: Unit,
}

impl ConvertRequest {
    #[allow(dead_code)]
    pub fn new(temperature: f64, from_unit: Unit, to_unit: Unit) -> Self {
        Self {
            raw_input: temperature.to_string(),
            temperature,
            from_unit,
            to_unit,
        }
    }

    /// 从表单文本构建请求，解析失败时温度为 NaN
    pub fn from_form(raw: &str, from_unit: Unit, to_unit: Unit) -> Self {
        let temperature = raw.trim().parse::<f64>().unwrap_or(f64::NAN);
        Self {
            raw_input: raw.to_string(),
            temperature,
            from_unit,
            to_unit,
        }
    }
}

/// 换算状态：最近一次提交的输入、温标和结果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionState {
    pub raw_input: String,
    pub source_unit: Option<Unit>,
    pub target_unit: Option<Unit>,
    pub converted_value: Option<f64>,
}

impl ConversionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_result(&self) -> bool {
        self.converted_value.is_some()
    }
}

/// Reducer：由旧状态和请求得到新状态，所有字段一次性覆盖
pub fn convert_temperature(_state: &ConversionState, request: &ConvertRequest) -> ConversionState {
    let converted = convert(request.temperature, request.from_unit, request.to_unit);
    tracing::info!(
        input = %request.raw_input,
        from = %request.from_unit,
        to = %request.to_unit,
        result = converted,
        "temperature converted"
    );
    ConversionState {
        raw_input: request.raw_input.clone(),
        source_unit: Some(request.from_unit),
        target_unit: Some(request.to_unit),
        converted_value: Some(converted),
    }
}
