//! The built-in configuration catalog.
//!
//! This file is data, not logic. Adding a domain, section, workspace or
//! type definition here is the whole change — the resolver, breadcrumbs
//! and workspace API pick it up without code edits. Cross-references are
//! checked by [`crate::registry::Registry::validate`] at startup.

use crate::model::*;

pub(crate) fn domains() -> Vec<Domain> {
    vec![
        Domain {
            id: "retail",
            name: "Retail",
            description: "Point of sale, inventory and merchandising",
            icon: "storefront",
            color: "blue",
            sections: &["pos", "inventory", "reporting"],
        },
        Domain {
            id: "finance",
            name: "Finance",
            description: "Accounting, receivables and financial reporting",
            icon: "bank",
            color: "green",
            sections: &["accounting", "receivables", "reporting"],
        },
        Domain {
            id: "manufacturing",
            name: "Manufacturing",
            description: "Production planning and materials",
            icon: "factory",
            color: "orange",
            sections: &["inventory", "production"],
        },
        Domain {
            id: "crm",
            name: "CRM",
            description: "Customer relationships and sales pipeline",
            icon: "handshake",
            color: "purple",
            sections: &["pipeline"],
        },
        Domain {
            id: "audit",
            name: "Audit",
            description: "Audit firm engagement management",
            icon: "magnifying-glass",
            color: "slate",
            sections: &["engagements"],
        },
        Domain {
            id: "salon",
            name: "Salon",
            description: "Appointment scheduling and service management",
            icon: "scissors",
            color: "pink",
            sections: &["scheduling", "reporting"],
        },
    ]
}

pub(crate) fn sections() -> Vec<Section> {
    vec![
        Section {
            id: "pos",
            name: "Point of Sale",
            description: "Checkout, returns and daily sales",
            icon: "cash-register",
            color: "blue",
            workspaces: &["main", "manager"],
            domains: &["retail"],
        },
        Section {
            id: "inventory",
            name: "Inventory",
            description: "Stock levels, movements and suppliers",
            icon: "package",
            color: "amber",
            workspaces: &["main", "manager", "back-office"],
            domains: &["retail", "manufacturing"],
        },
        Section {
            id: "accounting",
            name: "Accounting",
            description: "Chart of accounts and journals",
            icon: "calculator",
            color: "green",
            workspaces: &["owner", "back-office"],
            domains: &["finance"],
        },
        Section {
            id: "receivables",
            name: "Receivables",
            description: "Invoices and collections",
            icon: "invoice",
            color: "teal",
            workspaces: &["back-office"],
            domains: &["finance"],
        },
        Section {
            id: "production",
            name: "Production",
            description: "Work orders and shop floor",
            icon: "gear",
            color: "orange",
            workspaces: &["manager"],
            domains: &["manufacturing"],
        },
        Section {
            id: "pipeline",
            name: "Pipeline",
            description: "Leads, opportunities and follow-ups",
            icon: "funnel",
            color: "purple",
            workspaces: &["main"],
            domains: &["crm"],
        },
        Section {
            id: "engagements",
            name: "Engagements",
            description: "Audit engagements and client files",
            icon: "briefcase",
            color: "slate",
            workspaces: &["auditor"],
            domains: &["audit"],
        },
        Section {
            id: "scheduling",
            name: "Scheduling",
            description: "Appointments, staff and resources",
            icon: "calendar",
            color: "pink",
            workspaces: &["main", "front-desk"],
            domains: &["salon"],
        },
        Section {
            id: "reporting",
            name: "Reporting",
            description: "Dashboards and analytics",
            icon: "chart-bar",
            color: "indigo",
            workspaces: &["manager", "owner", "auditor"],
            domains: &["retail", "finance", "salon"],
        },
    ]
}

pub(crate) fn workspaces() -> Vec<Workspace> {
    vec![
        Workspace {
            id: "main",
            name: "Main",
            description: "Day-to-day operational screens",
            icon: "layout",
            color: "blue",
            persona_label: "Associate",
            visible_roles: &["staff", "manager", "owner", "admin"],
            default_nav: "overview",
            sections: &["pos", "inventory", "pipeline", "scheduling"],
            domains: &["retail", "crm", "salon"],
        },
        Workspace {
            id: "manager",
            name: "Manager",
            description: "Team oversight, approvals and targets",
            icon: "clipboard",
            color: "amber",
            persona_label: "Manager",
            visible_roles: &["manager", "owner", "admin"],
            default_nav: "team",
            sections: &["pos", "inventory", "production", "reporting"],
            domains: &["retail", "manufacturing", "finance"],
        },
        Workspace {
            id: "owner",
            name: "Owner",
            description: "Financial position and business health",
            icon: "crown",
            color: "green",
            persona_label: "Owner",
            visible_roles: &["owner", "admin"],
            default_nav: "financials",
            sections: &["accounting", "reporting"],
            domains: &["retail", "finance", "salon"],
        },
        Workspace {
            id: "back-office",
            name: "Back Office",
            description: "Bookkeeping, purchasing and supplier management",
            icon: "archive",
            color: "teal",
            persona_label: "Back Office",
            visible_roles: &["accountant", "admin"],
            default_nav: "ledger",
            sections: &["accounting", "receivables", "inventory"],
            domains: &["finance", "retail"],
        },
        Workspace {
            id: "auditor",
            name: "Auditor",
            description: "Engagement files, reviews and sign-off",
            icon: "stamp",
            color: "slate",
            persona_label: "Auditor",
            visible_roles: &["auditor", "partner", "admin"],
            default_nav: "engagements",
            sections: &["engagements", "reporting"],
            domains: &["audit", "finance"],
        },
        Workspace {
            id: "front-desk",
            name: "Front Desk",
            description: "Booking, check-in and the day's calendar",
            icon: "bell",
            color: "pink",
            persona_label: "Front Desk",
            visible_roles: &["staff", "manager", "admin"],
            default_nav: "calendar",
            sections: &["scheduling"],
            domains: &["salon"],
        },
    ]
}

pub(crate) fn entity_types() -> Vec<EntityType> {
    vec![
        EntityType {
            id: "customers",
            name: "Customers",
            description: "People and organizations you sell to",
            icon: "users",
            color: "blue",
            fields: &[
                Field { id: "name", label: "Name", kind: FieldKind::Text, required: true, options: &[] },
                Field { id: "email", label: "Email", kind: FieldKind::Email, required: false, options: &[] },
                Field { id: "phone", label: "Phone", kind: FieldKind::Phone, required: false, options: &[] },
                Field { id: "segment", label: "Segment", kind: FieldKind::Select, required: false, options: &["retail", "wholesale", "vip"] },
                Field { id: "credit_limit", label: "Credit Limit", kind: FieldKind::Currency, required: false, options: &[] },
            ],
            actions: &[Action::Create, Action::Read, Action::List, Action::Update, Action::Export],
            workspaces: &["main", "manager"],
        },
        EntityType {
            id: "products",
            name: "Products",
            description: "Sellable items and their pricing",
            icon: "tag",
            color: "amber",
            fields: &[
                Field { id: "sku", label: "SKU", kind: FieldKind::Text, required: true, options: &[] },
                Field { id: "name", label: "Name", kind: FieldKind::Text, required: true, options: &[] },
                Field { id: "price", label: "Price", kind: FieldKind::Currency, required: true, options: &[] },
                Field { id: "category", label: "Category", kind: FieldKind::Select, required: false, options: &["goods", "services", "bundles"] },
                Field { id: "active", label: "Active", kind: FieldKind::Boolean, required: false, options: &[] },
            ],
            actions: &[Action::Create, Action::Read, Action::List, Action::Update, Action::Archive, Action::Export],
            workspaces: &["main", "manager", "back-office"],
        },
        EntityType {
            id: "suppliers",
            name: "Suppliers",
            description: "Vendors you purchase from",
            icon: "truck",
            color: "teal",
            fields: &[
                Field { id: "name", label: "Name", kind: FieldKind::Text, required: true, options: &[] },
                Field { id: "contact_email", label: "Contact Email", kind: FieldKind::Email, required: false, options: &[] },
                Field { id: "payment_terms", label: "Payment Terms", kind: FieldKind::Select, required: false, options: &["net15", "net30", "net60"] },
            ],
            actions: &[Action::Create, Action::Read, Action::List, Action::Update],
            workspaces: &["back-office", "manager"],
        },
        EntityType {
            id: "accounts",
            name: "Accounts",
            description: "Chart of accounts entries",
            icon: "book",
            color: "green",
            fields: &[
                Field { id: "code", label: "Code", kind: FieldKind::Text, required: true, options: &[] },
                Field { id: "name", label: "Name", kind: FieldKind::Text, required: true, options: &[] },
                Field { id: "account_type", label: "Type", kind: FieldKind::Select, required: true, options: &["asset", "liability", "equity", "income", "expense"] },
                Field { id: "currency", label: "Currency", kind: FieldKind::Text, required: false, options: &[] },
            ],
            actions: &[Action::Create, Action::Read, Action::List, Action::Update, Action::Archive],
            workspaces: &["owner", "back-office"],
        },
        EntityType {
            id: "clients",
            name: "Clients",
            description: "Audit firm clients and their filings",
            icon: "buildings",
            color: "slate",
            fields: &[
                Field { id: "name", label: "Name", kind: FieldKind::Text, required: true, options: &[] },
                Field { id: "fiscal_year_end", label: "Fiscal Year End", kind: FieldKind::Date, required: false, options: &[] },
                Field { id: "risk_rating", label: "Risk Rating", kind: FieldKind::Select, required: false, options: &["low", "medium", "high"] },
            ],
            actions: &[Action::Create, Action::Read, Action::List, Action::Update],
            workspaces: &["auditor"],
        },
        EntityType {
            id: "staff",
            name: "Staff",
            description: "Employees and their roles",
            icon: "identification-badge",
            color: "purple",
            fields: &[
                Field { id: "name", label: "Name", kind: FieldKind::Text, required: true, options: &[] },
                Field { id: "role", label: "Role", kind: FieldKind::Select, required: true, options: &["stylist", "cashier", "accountant", "technician"] },
                Field { id: "email", label: "Email", kind: FieldKind::Email, required: false, options: &[] },
            ],
            actions: &[Action::Create, Action::Read, Action::List, Action::Update, Action::Archive],
            workspaces: &["manager", "front-desk"],
        },
        EntityType {
            id: "services",
            name: "Services",
            description: "Bookable salon services",
            icon: "sparkle",
            color: "pink",
            fields: &[
                Field { id: "name", label: "Name", kind: FieldKind::Text, required: true, options: &[] },
                Field { id: "duration_minutes", label: "Duration (min)", kind: FieldKind::Number, required: true, options: &[] },
                Field { id: "price", label: "Price", kind: FieldKind::Currency, required: false, options: &[] },
            ],
            actions: &[Action::Create, Action::Read, Action::List, Action::Update],
            workspaces: &["main", "front-desk"],
        },
    ]
}

pub(crate) fn transaction_types() -> Vec<TransactionType> {
    vec![
        TransactionType {
            id: "sales",
            name: "Sales",
            description: "Sales orders and receipts",
            icon: "shopping-cart",
            color: "blue",
            fields: &[
                Field { id: "customer", label: "Customer", kind: FieldKind::Reference, required: true, options: &[] },
                Field { id: "date", label: "Date", kind: FieldKind::Date, required: true, options: &[] },
                Field { id: "total", label: "Total", kind: FieldKind::Currency, required: false, options: &[] },
            ],
            actions: &[Action::Create, Action::Read, Action::List, Action::Update, Action::Export],
            has_lines: true,
            statuses: &["draft", "posted", "completed", "cancelled"],
            workspaces: &["main", "manager"],
        },
        TransactionType {
            id: "purchases",
            name: "Purchases",
            description: "Purchase orders to suppliers",
            icon: "basket",
            color: "teal",
            fields: &[
                Field { id: "supplier", label: "Supplier", kind: FieldKind::Reference, required: true, options: &[] },
                Field { id: "expected_date", label: "Expected Date", kind: FieldKind::Date, required: false, options: &[] },
            ],
            actions: &[Action::Create, Action::Read, Action::List, Action::Update],
            has_lines: true,
            statuses: &["draft", "approved", "received", "completed", "cancelled"],
            workspaces: &["back-office", "manager"],
        },
        TransactionType {
            id: "invoices",
            name: "Invoices",
            description: "Customer invoices and payments",
            icon: "receipt",
            color: "green",
            fields: &[
                Field { id: "customer", label: "Customer", kind: FieldKind::Reference, required: true, options: &[] },
                Field { id: "due_date", label: "Due Date", kind: FieldKind::Date, required: true, options: &[] },
                Field { id: "amount", label: "Amount", kind: FieldKind::Currency, required: true, options: &[] },
            ],
            actions: &[Action::Create, Action::Read, Action::List, Action::Update, Action::Export],
            has_lines: true,
            statuses: &["draft", "sent", "paid", "completed", "cancelled"],
            workspaces: &["back-office", "owner"],
        },
        TransactionType {
            id: "appointments",
            name: "Appointments",
            description: "Booked salon appointments",
            icon: "calendar-check",
            color: "pink",
            fields: &[
                Field { id: "customer", label: "Customer", kind: FieldKind::Reference, required: true, options: &[] },
                Field { id: "service", label: "Service", kind: FieldKind::Reference, required: true, options: &[] },
                Field { id: "start_time", label: "Start Time", kind: FieldKind::Date, required: true, options: &[] },
            ],
            actions: &[Action::Create, Action::Read, Action::List, Action::Update],
            has_lines: false,
            statuses: &["booked", "checked-in", "completed", "cancelled"],
            workspaces: &["main", "front-desk"],
        },
        TransactionType {
            id: "work-orders",
            name: "Work Orders",
            description: "Production work orders",
            icon: "wrench",
            color: "orange",
            fields: &[
                Field { id: "product", label: "Product", kind: FieldKind::Reference, required: true, options: &[] },
                Field { id: "quantity", label: "Quantity", kind: FieldKind::Number, required: true, options: &[] },
            ],
            actions: &[Action::Create, Action::Read, Action::List, Action::Update],
            has_lines: true,
            statuses: &["open", "in-progress", "completed", "cancelled"],
            workspaces: &["manager"],
        },
    ]
}

pub(crate) fn workflow_types() -> Vec<WorkflowType> {
    vec![
        WorkflowType {
            id: "invoice-approval",
            name: "Invoice Approval",
            description: "Review and post outgoing invoices",
            icon: "check-circle",
            color: "green",
            steps: &[
                WorkflowStep { id: "submit", name: "Submit", kind: StepKind::Manual, required: true },
                WorkflowStep { id: "review", name: "Review", kind: StepKind::Approval, required: true },
                WorkflowStep { id: "post", name: "Post", kind: StepKind::Automatic, required: true },
            ],
            triggers: &["invoices.created"],
            workspaces: &["back-office", "owner"],
        },
        WorkflowType {
            id: "purchase-approval",
            name: "Purchase Approval",
            description: "Approve purchase orders above threshold",
            icon: "shield-check",
            color: "teal",
            steps: &[
                WorkflowStep { id: "request", name: "Request", kind: StepKind::Manual, required: true },
                WorkflowStep { id: "approve", name: "Approve", kind: StepKind::Approval, required: true },
                WorkflowStep { id: "send", name: "Send to Supplier", kind: StepKind::Automatic, required: false },
            ],
            triggers: &["purchases.created"],
            workspaces: &["manager", "back-office"],
        },
        WorkflowType {
            id: "engagement-signoff",
            name: "Engagement Sign-off",
            description: "Partner review and archival of completed engagements",
            icon: "stamp",
            color: "slate",
            steps: &[
                WorkflowStep { id: "fieldwork", name: "Fieldwork Complete", kind: StepKind::Manual, required: true },
                WorkflowStep { id: "partner-review", name: "Partner Review", kind: StepKind::Approval, required: true },
                WorkflowStep { id: "archive", name: "Archive", kind: StepKind::Automatic, required: false },
            ],
            triggers: &["engagements.completed"],
            workspaces: &["auditor"],
        },
    ]
}

pub(crate) fn relationship_types() -> Vec<RelationshipType> {
    vec![
        RelationshipType {
            id: "product-suppliers",
            name: "Product Suppliers",
            description: "Which suppliers stock which products",
            source_types: &["products"],
            target_types: &["suppliers"],
            cardinality: Cardinality::ManyToMany,
            workspaces: &["back-office", "manager"],
        },
        RelationshipType {
            id: "customer-accounts",
            name: "Customer Accounts",
            description: "Receivable accounts per customer",
            source_types: &["customers"],
            target_types: &["accounts"],
            cardinality: Cardinality::OneToMany,
            workspaces: &["owner", "back-office"],
        },
        RelationshipType {
            id: "staff-services",
            name: "Staff Services",
            description: "Which staff can perform which services",
            source_types: &["staff"],
            target_types: &["services"],
            cardinality: Cardinality::ManyToMany,
            workspaces: &["front-desk", "manager"],
        },
    ]
}

pub(crate) fn analytics_types() -> Vec<AnalyticsType> {
    vec![
        AnalyticsType {
            id: "sales-performance",
            name: "Sales Performance",
            description: "Revenue and units by period and category",
            icon: "trend-up",
            color: "blue",
            chart_types: &[ChartKind::Bar, ChartKind::Line, ChartKind::Kpi],
            dimensions: &["period", "category", "staff"],
            measures: &["revenue", "units", "margin"],
            workspaces: &["manager", "owner"],
        },
        AnalyticsType {
            id: "cash-flow",
            name: "Cash Flow",
            description: "Inflows and outflows by account over time",
            icon: "currency-circle",
            color: "green",
            chart_types: &[ChartKind::Line, ChartKind::Area, ChartKind::Table],
            dimensions: &["period", "account"],
            measures: &["inflow", "outflow", "net"],
            workspaces: &["owner"],
        },
        AnalyticsType {
            id: "utilization",
            name: "Utilization",
            description: "Booked hours against staff capacity",
            icon: "gauge",
            color: "pink",
            chart_types: &[ChartKind::Bar, ChartKind::Kpi],
            dimensions: &["staff", "service", "period"],
            measures: &["booked_hours", "capacity", "rate"],
            workspaces: &["front-desk", "manager"],
        },
    ]
}
