//! App 状态定义 (Model)
//!
//! 表单字段、焦点以及最近一次换算的状态

use crate::config::Config;
use crate::models::{ConversionState, Unit};

/// 应用状态
pub struct App {
    pub conversion: ConversionState,
    pub focus: FormField,
    pub input_buffer: String, // 温度输入框中尚未提交的文本
    pub from_unit: Option<Unit>,
    pub to_unit: Option<Unit>,
    pub precision: Option<usize>,
    pub message: Option<String>,
}

/// 表单字段（按焦点顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Temperature,
    FromUnit,
    ToUnit,
    ConvertButton,
}

impl FormField {
    pub fn next(&self) -> Self {
        match self {
            FormField::Temperature => FormField::FromUnit,
            FormField::FromUnit => FormField::ToUnit,
            FormField::ToUnit => FormField::ConvertButton,
            FormField::ConvertButton => FormField::Temperature,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FormField::Temperature => FormField::ConvertButton,
            FormField::FromUnit => FormField::Temperature,
            FormField::ToUnit => FormField::FromUnit,
            FormField::ConvertButton => FormField::ToUnit,
        }
    }
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: &Config) -> Self {
        Self {
            conversion: ConversionState::new(),
            focus: FormField::Temperature,
            input_buffer: String::new(),
            from_unit: config.default_from,
            to_unit: config.default_to,
            precision: config.precision,
            message: None,
        }
    }

    /// 三个字段都填写后才允许提交
    pub fn can_convert(&self) -> bool {
        !self.input_buffer.is_empty() && self.from_unit.is_some() && self.to_unit.is_some()
    }

    /// 结果行文本
    pub fn result_text(&self) -> String {
        match (self.conversion.converted_value, self.conversion.target_unit) {
            (Some(value), Some(unit)) => {
                let value = match self.precision {
                    Some(precision) => format!("{:.*}", precision, value),
                    None => value.to_string(),
                };
                format!("Converted Temperature: {} {}", value, unit)
            }
            _ => "No temperature converted yet".to_string(),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
