// src/common/money.rs

use rust_decimal::Decimal;

/// Formata um valor como moeda brasileira: R$15.000,00
/// (ponto como separador de milhar, vírgula nos centavos).
pub fn format_brl(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let negative = rounded.is_sign_negative();
    let text = format!("{:.2}", rounded.abs());

    let (int_part, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-R${},{}", grouped, cents)
    } else {
        format!("R${},{}", grouped, cents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn formata_valores_inteiros() {
        assert_eq!(format_brl(Decimal::from(0)), "R$0,00");
        assert_eq!(format_brl(Decimal::from(15000)), "R$15.000,00");
        assert_eq!(format_brl(Decimal::from(125000)), "R$125.000,00");
    }

    #[test]
    fn formata_centavos_e_milhoes() {
        assert_eq!(format_brl(Decimal::new(123456750, 2)), "R$1.234.567,50");
        assert_eq!(format_brl(Decimal::new(995, 1)), "R$99,50");
    }

    #[test]
    fn arredonda_para_dois_decimais() {
        assert_eq!(format_brl(Decimal::new(10006, 3)), "R$10,01");
    }
}
