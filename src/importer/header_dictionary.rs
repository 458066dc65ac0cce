// ==========================================
// Fleetify Import Core - Bilingual Header Dictionary
// ==========================================
// Role: static Arabic/English alias table → canonical field keys
// Rule: entity-specific meaning lives in HeaderAlias::overrides,
//       never in mutable lookup state
// ==========================================

use crate::domain::types::{EntityKind, FieldType};

pub const AMOUNT_KEY: &str = "amount";

// ==========================================
// HeaderAlias - one dictionary entry
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderAlias {
    pub default_key: &'static str,
    pub overrides: &'static [(EntityKind, &'static str)],
    /// Generic amount term: the row also keeps a literal `amount` key.
    pub dual_amount: bool,
}

impl HeaderAlias {
    pub const fn field(key: &'static str) -> Self {
        Self {
            default_key: key,
            overrides: &[],
            dual_amount: false,
        }
    }

    pub fn resolve(&self, entity_kind: EntityKind) -> &'static str {
        self.overrides
            .iter()
            .find(|(kind, _)| *kind == entity_kind)
            .map(|(_, key)| *key)
            .unwrap_or(self.default_key)
    }
}

// Non-customer entities never own a phone, they reference a customer's.
const PHONE: HeaderAlias = HeaderAlias {
    default_key: "customer_phone",
    overrides: &[(EntityKind::Customer, "phone")],
    dual_amount: false,
};

const AMOUNT: HeaderAlias = HeaderAlias {
    default_key: AMOUNT_KEY,
    overrides: &[(EntityKind::Contract, "contract_amount")],
    dual_amount: true,
};

// The operators' chart-of-accounts template puts the Arabic name under "الوصف".
const DESCRIPTION_AR: HeaderAlias = HeaderAlias {
    default_key: "description",
    overrides: &[(EntityKind::ChartAccount, "account_name_ar")],
    dual_amount: false,
};

const NAME: HeaderAlias = HeaderAlias {
    default_key: "full_name",
    overrides: &[(EntityKind::ChartAccount, "account_name")],
    dual_amount: false,
};

const NAME_AR: HeaderAlias = HeaderAlias {
    default_key: "full_name",
    overrides: &[(EntityKind::ChartAccount, "account_name_ar")],
    dual_amount: false,
};

/// Look up one (already trimmed, possibly lowercased) header.
pub fn lookup_header(header: &str) -> Option<HeaderAlias> {
    let alias = match header {
        // ===== polymorphic =====
        "phone" | "phone number" | "phone_number" | "phone no" | "mobile" | "mobile number"
        | "mobile_number" | "telephone" | "tel" | "customer phone" | "الهاتف" | "هاتف"
        | "رقم الهاتف" | "الجوال" | "جوال" | "رقم الجوال" | "الموبايل" | "رقم الموبايل"
        | "هاتف العميل" | "رقم هاتف العميل" => PHONE,

        "amount" | "value" | "المبلغ" | "مبلغ" | "القيمة" => AMOUNT,

        "الوصف" => DESCRIPTION_AR,

        "name" => NAME,
        "الاسم" => NAME_AR,

        // ===== customer =====
        "full_name" | "full name" | "الاسم الكامل" => HeaderAlias::field("full_name"),
        "customer_code" | "customer code" | "كود العميل" | "رقم العميل" => {
            HeaderAlias::field("customer_code")
        }
        "customer_type" | "customer type" | "نوع العميل" => HeaderAlias::field("customer_type"),
        "first_name" | "first name" | "firstname" | "الاسم الأول" => {
            HeaderAlias::field("first_name")
        }
        "last_name" | "last name" | "lastname" | "اسم العائلة" | "الاسم الأخير" => {
            HeaderAlias::field("last_name")
        }
        "first_name_ar" | "الاسم الأول بالعربي" => HeaderAlias::field("first_name_ar"),
        "last_name_ar" | "اسم العائلة بالعربي" => HeaderAlias::field("last_name_ar"),
        "company_name" | "company name" | "اسم الشركة" => HeaderAlias::field("company_name"),
        "company_name_ar" | "اسم الشركة بالعربي" => HeaderAlias::field("company_name_ar"),
        "email" | "e-mail" | "email address" | "البريد الإلكتروني" | "البريد الالكتروني"
        | "الإيميل" => HeaderAlias::field("email"),
        "national_id" | "national id" | "id number" | "qid" | "civil id" | "رقم الهوية"
        | "الرقم المدني" | "رقم البطاقة الشخصية" => HeaderAlias::field("national_id"),
        "passport_number" | "passport number" | "passport" | "رقم الجواز" | "رقم جواز السفر" => {
            HeaderAlias::field("passport_number")
        }
        "license_number" | "license number" | "driving license" | "رقم الرخصة"
        | "رقم رخصة القيادة" => HeaderAlias::field("license_number"),
        "license_expiry" | "license expiry" | "انتهاء الرخصة" | "تاريخ انتهاء الرخصة" => {
            HeaderAlias::field("license_expiry")
        }
        "date_of_birth" | "date of birth" | "dob" | "birth date" | "تاريخ الميلاد" => {
            HeaderAlias::field("date_of_birth")
        }
        "address" | "العنوان" => HeaderAlias::field("address"),
        "city" | "المدينة" => HeaderAlias::field("city"),
        "country" | "الدولة" | "البلد" => HeaderAlias::field("country"),
        "is_blacklisted" | "blacklisted" | "محظور" | "قائمة سوداء" => {
            HeaderAlias::field("is_blacklisted")
        }
        "is_active" | "active" | "نشط" | "فعال" => HeaderAlias::field("is_active"),
        "status" | "الحالة" => HeaderAlias::field("status"),
        "notes" | "note" | "remarks" | "ملاحظات" | "ملاحظة" => HeaderAlias::field("notes"),
        "description" => HeaderAlias::field("description"),

        // ===== vehicle =====
        "plate_number" | "plate number" | "plate" | "license plate" | "رقم اللوحة" | "اللوحة"
        | "لوحة المركبة" => HeaderAlias::field("plate_number"),
        "make" | "brand" | "manufacturer" | "الشركة المصنعة" | "الماركة" | "الصانع" => {
            HeaderAlias::field("make")
        }
        "model" | "الموديل" | "الطراز" => HeaderAlias::field("model"),
        "year" | "model year" | "manufacturing year" | "سنة الصنع" | "السنة" | "سنة الموديل" => {
            HeaderAlias::field("year")
        }
        "color" | "colour" | "اللون" => HeaderAlias::field("color"),
        "vin" | "vin number" | "chassis number" | "رقم الهيكل" | "رقم الشاصي" => {
            HeaderAlias::field("vin")
        }
        "engine_number" | "engine number" | "رقم المحرك" => HeaderAlias::field("engine_number"),
        "registration_expiry" | "registration expiry" | "انتهاء الاستمارة" | "انتهاء التسجيل" => {
            HeaderAlias::field("registration_expiry")
        }
        "insurance_expiry" | "insurance expiry" | "انتهاء التأمين" => {
            HeaderAlias::field("insurance_expiry")
        }
        "daily_rate" | "daily rate" | "الإيجار اليومي" | "السعر اليومي" => {
            HeaderAlias::field("daily_rate")
        }
        "weekly_rate" | "weekly rate" | "الإيجار الأسبوعي" => HeaderAlias::field("weekly_rate"),
        "monthly_rate" | "monthly rate" | "الإيجار الشهري" | "السعر الشهري" => {
            HeaderAlias::field("monthly_rate")
        }
        "current_mileage" | "mileage" | "odometer" | "عداد المسافة" | "الممشى" | "الكيلومترات" => {
            HeaderAlias::field("current_mileage")
        }
        "fuel_type" | "fuel type" | "نوع الوقود" => HeaderAlias::field("fuel_type"),
        "seating_capacity" | "seats" | "عدد المقاعد" => HeaderAlias::field("seating_capacity"),

        // ===== contract =====
        "contract_number" | "contract number" | "contract no" | "رقم العقد" => {
            HeaderAlias::field("contract_number")
        }
        "contract_type" | "contract type" | "نوع العقد" => HeaderAlias::field("contract_type"),
        "contract_date" | "contract date" | "تاريخ العقد" => HeaderAlias::field("contract_date"),
        "start_date" | "start date" | "تاريخ البداية" | "تاريخ البدء" => {
            HeaderAlias::field("start_date")
        }
        "end_date" | "end date" | "تاريخ النهاية" | "تاريخ الانتهاء" => {
            HeaderAlias::field("end_date")
        }
        "contract_amount" | "contract amount" | "قيمة العقد" | "مبلغ العقد" => {
            HeaderAlias::field("contract_amount")
        }
        "monthly_amount" | "monthly amount" | "المبلغ الشهري" | "القسط الشهري" => {
            HeaderAlias::field("monthly_amount")
        }
        "customer_name" | "customer name" | "اسم العميل" => HeaderAlias::field("customer_name"),
        "customer_id" | "customer id" | "معرف العميل" => HeaderAlias::field("customer_id"),
        "vehicle_number" | "vehicle number" | "رقم المركبة" => {
            HeaderAlias::field("vehicle_number")
        }
        "terms" | "الشروط" => HeaderAlias::field("terms"),

        // ===== payment =====
        "payment_number" | "payment number" | "receipt number" | "رقم الدفعة" | "رقم الإيصال"
        | "رقم السند" => HeaderAlias::field("payment_number"),
        "payment_date" | "payment date" | "date paid" | "تاريخ الدفع" | "تاريخ السداد" => {
            HeaderAlias::field("payment_date")
        }
        "payment_method" | "payment method" | "method" | "طريقة الدفع" => {
            HeaderAlias::field("payment_method")
        }
        "payment_type" | "payment type" | "نوع الدفع" | "نوع الدفعة" => {
            HeaderAlias::field("payment_type")
        }
        "reference_number" | "reference number" | "reference" | "ref" | "رقم المرجع" | "المرجع" => {
            HeaderAlias::field("reference_number")
        }
        "check_number" | "cheque number" | "check number" | "رقم الشيك" => {
            HeaderAlias::field("check_number")
        }
        "due_date" | "due date" | "تاريخ الاستحقاق" => HeaderAlias::field("due_date"),
        "late_fine" | "late fee" | "غرامة التأخير" => HeaderAlias::field("late_fine"),

        // ===== chart of accounts =====
        "account_code" | "account code" | "account number" | "account no" | "رقم الحساب"
        | "كود الحساب" => HeaderAlias::field("account_code"),
        "account_name" | "account name" | "الوصف بالإنجليزي" | "اسم الحساب بالإنجليزي"
        | "الاسم بالإنجليزي" => HeaderAlias::field("account_name"),
        "account_name_ar" | "اسم الحساب" | "اسم الحساب بالعربي" | "الوصف بالعربي" => {
            HeaderAlias::field("account_name_ar")
        }
        "account_type" | "account type" | "نوع الحساب" => HeaderAlias::field("account_type"),
        "account_subtype" | "account subtype" | "النوع الفرعي" => {
            HeaderAlias::field("account_subtype")
        }
        "balance_type" | "balance type" | "نوع الرصيد" | "طبيعة الحساب" => {
            HeaderAlias::field("balance_type")
        }
        "parent_account_code" | "parent account code" | "parent code" | "parent account"
        | "parent" | "الحساب الأب" | "رقم الحساب الأب" | "الحساب الرئيسي" => {
            HeaderAlias::field("parent_account_code")
        }
        "account_level" | "account level" | "level" | "المستوى" | "مستوى" => {
            HeaderAlias::field("account_level")
        }
        "is_header" | "header" | "حساب رئيسي" | "حساب إجمالي" => HeaderAlias::field("is_header"),
        "opening_balance" | "opening balance" | "الرصيد الافتتاحي" => {
            HeaderAlias::field("opening_balance")
        }

        _ => return None,
    };
    Some(alias)
}

/// Every key the dictionary can produce.
pub const CANONICAL_FIELDS: &[&str] = &[
    // customer
    "phone", "full_name", "customer_code", "customer_type", "first_name", "last_name",
    "first_name_ar", "last_name_ar", "company_name", "company_name_ar", "email", "national_id",
    "passport_number", "license_number", "license_expiry", "date_of_birth", "address", "city",
    "country", "is_blacklisted", "is_active", "status", "notes", "description",
    // vehicle
    "plate_number", "make", "model", "year", "color", "vin", "engine_number",
    "registration_expiry", "insurance_expiry", "daily_rate", "weekly_rate", "monthly_rate",
    "current_mileage", "fuel_type", "seating_capacity",
    // contract
    "contract_number", "contract_type", "contract_date", "start_date", "end_date",
    "contract_amount", "monthly_amount", "customer_name", "customer_id", "customer_phone",
    "vehicle_number", "terms",
    // payment
    "amount", "payment_number", "payment_date", "payment_method", "payment_type",
    "reference_number", "check_number", "due_date", "late_fine",
    // chart of accounts
    "account_code", "account_name", "account_name_ar", "account_type", "account_subtype",
    "balance_type", "parent_account_code", "account_level", "is_header", "opening_balance",
];

pub fn is_canonical(key: &str) -> bool {
    CANONICAL_FIELDS.contains(&key)
}

/// Types fixed by the vocabulary, applied before caller-declared types.
///
/// Identifier-like keys stay text so leading zeros survive; account_level is numeric.
pub fn declared_field_type(key: &str) -> Option<FieldType> {
    match key {
        "account_code" | "parent_account_code" | "phone" | "customer_phone" | "national_id"
        | "passport_number" | "license_number" | "plate_number" | "vin" | "engine_number"
        | "contract_number" | "payment_number" | "reference_number" | "check_number"
        | "customer_code" | "customer_id" | "vehicle_number" => Some(FieldType::Text),
        "account_level" => Some(FieldType::Number),
        _ => None,
    }
}
