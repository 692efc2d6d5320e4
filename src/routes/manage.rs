//! Route definitions for the ConnectWise Manage REST API 3.0.

use super::{
    delete_one, get_many, get_one, patch_one, post_many, post_one, put_one, RouteDef, DELETE_EMPTY,
};

pub(super) const ROUTES: &[RouteDef] = &[
    RouteDef {
        path: "company/companies/statuses/{id}/usages",
        operations: &[get_many("Usage")],
        count: false,
        id: false,
    },
    RouteDef {
        path: "company/companies/{id}/managementReportNotifications/{id}",
        operations: &[
            get_one("ManagementReportNotification"),
            DELETE_EMPTY,
            put_one("ManagementReportNotification"),
            patch_one("ManagementReportNotification"),
        ],
        count: false,
        id: false,
    },
    RouteDef {
        path: "company/companyTypeAssociations",
        operations: &[
            get_many("CompanyCompanyTypeAssociation"),
            post_one("CompanyCompanyTypeAssociation"),
        ],
        count: true,
        id: true,
    },
    RouteDef {
        path: "company/configurations/types/{id}/questions/{id}/values/{id}",
        operations: &[
            get_one("ConfigurationTypeQuestionValue"),
            DELETE_EMPTY,
            put_one("ConfigurationTypeQuestionValue"),
            patch_one("ConfigurationTypeQuestionValue"),
        ],
        count: false,
        id: false,
    },
    RouteDef {
        path: "company/contacts/departments",
        operations: &[get_many("ContactDepartment"), post_one("ContactDepartment")],
        count: true,
        id: true,
    },
    RouteDef {
        path: "company/managedDevicesIntegrations",
        operations: &[
            get_many("ManagedDevicesIntegration"),
            post_one("ManagedDevicesIntegration"),
        ],
        count: true,
        id: true,
    },
    RouteDef {
        path: "company/management/{id}/log/download",
        operations: &[get_one("GenericMessageModel")],
        count: false,
        id: false,
    },
    RouteDef {
        path: "company/marketDescriptions",
        operations: &[get_many("MarketDescription"), post_one("MarketDescription")],
        count: true,
        id: true,
    },
    RouteDef {
        path: "company/marketDescriptions/{id}",
        operations: &[
            get_one("MarketDescription"),
            delete_one("GenericMessageModel"),
            put_one("MarketDescription"),
            patch_one("MarketDescription"),
        ],
        count: false,
        id: false,
    },
    RouteDef {
        path: "company/noteTypes",
        operations: &[get_many("CompanyNoteType"), post_one("CompanyNoteType")],
        count: true,
        id: true,
    },
    RouteDef {
        path: "company/noteTypes/info",
        operations: &[get_many("CompanyNoteTypeInfo")],
        count: false,
        id: false,
    },
    RouteDef {
        path: "company/states",
        operations: &[get_many("State"), post_one("State")],
        count: true,
        id: true,
    },
    RouteDef {
        path: "company/states/info",
        operations: &[get_many("StateInfo")],
        count: true,
        id: false,
    },
    RouteDef {
        path: "company/tracks",
        operations: &[get_many("Track"), post_one("Track")],
        count: true,
        id: true,
    },
    RouteDef {
        path: "expense/entries/{id}",
        operations: &[
            get_one("ExpenseEntry"),
            DELETE_EMPTY,
            put_one("ExpenseEntry"),
            patch_one("ExpenseEntry"),
        ],
        count: false,
        id: false,
    },
    RouteDef {
        path: "expense/types",
        operations: &[get_many("ExpenseType"), post_one("ExpenseType")],
        count: true,
        id: true,
    },
    RouteDef {
        path: "finance/accounting/batches",
        operations: &[get_many("AccountingBatch"), post_one("GLExport")],
        count: true,
        id: true,
    },
    RouteDef {
        path: "finance/accounting/batches/{id}/entries/{id}",
        operations: &[get_one("BatchEntry")],
        count: false,
        id: false,
    },
    RouteDef {
        path: "finance/accounting/batches/{id}/export",
        operations: &[post_one("GLExport")],
        count: false,
        id: false,
    },
    RouteDef {
        path: "finance/accounting/unpostedprocurement/{id}/taxableLevels",
        operations: &[get_many("UnpostedProcurementTaxableLevel")],
        count: true,
        id: true,
    },
    RouteDef {
        path: "finance/accountingPackages",
        operations: &[get_many("AccountingPackage")],
        count: true,
        id: true,
    },
    RouteDef {
        path: "finance/agreements/types/info",
        operations: &[get_many("AgreementTypeInfo")],
        count: true,
        id: false,
    },
    RouteDef {
        path: "finance/agreements/{id}/adjustments/{id}",
        operations: &[
            get_one("Agreement"),
            delete_one("GenericMessageModel"),
            put_one("Agreement"),
            patch_one("Agreement"),
        ],
        count: false,
        id: false,
    },
    RouteDef {
        path: "finance/agreements/{id}/sites",
        operations: &[get_many("AgreementSite"), post_one("AgreementSite")],
        count: true,
        id: true,
    },
    RouteDef {
        path: "finance/billingCycles/info",
        operations: &[get_many("BillingCycleInfo")],
        count: true,
        id: false,
    },
    RouteDef {
        path: "finance/billingSetups",
        operations: &[get_many("BillingSetup"), post_one("BillingSetup")],
        count: true,
        id: true,
    },
    RouteDef {
        path: "finance/currencies/info",
        operations: &[get_many("CurrencyInfo")],
        count: true,
        id: false,
    },
    RouteDef {
        path: "finance/taxCodes/{id}/info",
        operations: &[get_one("TaxCodeInfo")],
        count: false,
        id: false,
    },
    RouteDef {
        path: "finance/taxCodes/{id}/productTypeExemptions",
        operations: &[get_many("ProductTypeExemption"), post_one("ProductTypeExemption")],
        count: true,
        id: true,
    },
    RouteDef {
        path: "finance/taxCodes/{id}/productTypeExemptions/{id}",
        operations: &[
            get_one("ProductTypeExemption"),
            DELETE_EMPTY,
            put_one("ProductTypeExemption"),
            patch_one("ProductTypeExemption"),
        ],
        count: false,
        id: false,
    },
    RouteDef {
        path: "finance/taxCodes/{id}/productTypeExemptions/{id}/taxableProductTypeLevels/{id}",
        operations: &[
            get_one("TaxableProductTypeLevel"),
            delete_one("GenericMessageModel"),
            put_one("TaxableProductTypeLevel"),
            patch_one("TaxableProductTypeLevel"),
        ],
        count: false,
        id: false,
    },
    RouteDef {
        path: "finance/taxCodes/{id}/taxCodeLevels/{id}",
        operations: &[
            get_one("TaxCodeLevel"),
            DELETE_EMPTY,
            put_one("TaxCodeLevel"),
            patch_one("TaxCodeLevel"),
        ],
        count: false,
        id: false,
    },
    RouteDef {
        path: "finance/taxIntegrations/{id}",
        operations: &[
            get_one("TaxIntegration"),
            put_one("TaxIntegration"),
            patch_one("TaxIntegration"),
        ],
        count: false,
        id: false,
    },
    RouteDef {
        path: "marketing/campaigns/subTypes/{id}",
        operations: &[
            get_one("CampaignSubTypeCampaignSubType"),
            DELETE_EMPTY,
            put_one("CampaignSubTypeCampaignSubType"),
            patch_one("CampaignSubTypeCampaignSubType"),
        ],
        count: false,
        id: false,
    },
    RouteDef {
        path: "marketing/campaigns/{id}/linksClicked/{id}",
        operations: &[
            get_one("LinkClicked"),
            DELETE_EMPTY,
            put_one("LinkClicked"),
            patch_one("LinkClicked"),
        ],
        count: false,
        id: false,
    },
    RouteDef {
        path: "procurement/categories",
        operations: &[get_many("Category"), post_one("Category")],
        count: true,
        id: true,
    },
    RouteDef {
        path: "procurement/onhandserialnumbers",
        operations: &[get_many("OnHandSerialNumber")],
        count: true,
        id: true,
    },
    RouteDef {
        path: "procurement/pricingschedules",
        operations: &[get_many("PricingSchedule"), post_one("PricingSchedule")],
        count: true,
        id: true,
    },
    RouteDef {
        path: "procurement/pricingschedules/{id}/details/{id}/breaks",
        operations: &[get_many("PricingBreak"), post_one("PricingBreak")],
        count: true,
        id: true,
    },
    RouteDef {
        path: "procurement/purchaseorders/{id}/lineitems/{id}",
        operations: &[
            get_one("PurchaseOrderLineItem"),
            put_one("PurchaseOrderLineItem"),
            patch_one("PurchaseOrderLineItem"),
        ],
        count: false,
        id: false,
    },
    RouteDef {
        path: "procurement/rmaActions",
        operations: &[get_many("RmaAction"), post_one("RmaAction")],
        count: true,
        id: true,
    },
    RouteDef {
        path: "procurement/rmaTags",
        operations: &[get_many("RmaTag"), post_one("RmaTag")],
        count: true,
        id: true,
    },
    RouteDef {
        path: "project/projects/{id}/phases",
        operations: &[get_many("ProjectPhase"), post_one("ProjectPhase")],
        count: true,
        id: true,
    },
    RouteDef {
        path: "project/projects/{id}/phases/{id}",
        operations: &[
            get_one("ProjectPhase"),
            delete_one("GenericMessageModel"),
            put_one("ProjectPhase"),
            patch_one("ProjectPhase"),
        ],
        count: false,
        id: false,
    },
    RouteDef {
        path: "project/tickets",
        operations: &[get_many("ProjectTicket"), post_one("ProjectTicket")],
        count: true,
        id: true,
    },
    RouteDef {
        path: "project/tickets/search",
        operations: &[post_many("ProjectTicket")],
        count: false,
        id: false,
    },
    RouteDef {
        path: "project/tickets/{id}/allNotes",
        operations: &[get_many("ProjectTicketNote")],
        count: false,
        id: false,
    },
    RouteDef {
        path: "sales/opportunities/statuses/{id}",
        operations: &[
            get_one("OpportunityStatus"),
            DELETE_EMPTY,
            put_one("OpportunityStatus"),
            patch_one("OpportunityStatus"),
        ],
        count: false,
        id: false,
    },
    RouteDef {
        path: "sales/opportunities/types",
        operations: &[get_many("OpportunityType"), post_one("OpportunityType")],
        count: true,
        id: true,
    },
    RouteDef {
        path: "sales/opportunities/{id}/convertToServiceTicket",
        operations: &[post_one("Ticket")],
        count: false,
        id: false,
    },
    RouteDef {
        path: "sales/orders/statuses/{id}/emailtemplates/{id}",
        operations: &[
            get_one("OrderStatusEmailTemplate"),
            DELETE_EMPTY,
            put_one("OrderStatusEmailTemplate"),
            patch_one("OrderStatusEmailTemplate"),
        ],
        count: false,
        id: false,
    },
    RouteDef {
        path: "sales/roles",
        operations: &[get_many("Role"), post_one("Role")],
        count: true,
        id: true,
    },
    RouteDef {
        path: "schedule/calendars/info/count",
        operations: &[get_one("CalendarInfo")],
        count: false,
        id: false,
    },
    RouteDef {
        path: "schedule/calendars/{id}",
        operations: &[
            get_one("Calendar"),
            patch_one("Calendar"),
            put_one("Calendar"),
            DELETE_EMPTY,
        ],
        count: false,
        id: false,
    },
    RouteDef {
        path: "schedule/entries/{id}/details/{id}",
        operations: &[get_one("ScheduleDetail")],
        count: false,
        id: false,
    },
    RouteDef {
        path: "schedule/reminderTimes/{id}",
        operations: &[
            get_one("ScheduleReminderTime"),
            put_one("ScheduleReminderTime"),
            patch_one("ScheduleReminderTime"),
        ],
        count: false,
        id: false,
    },
    RouteDef {
        path: "schedule/statuses",
        operations: &[get_many("ScheduleStatus"), post_one("ScheduleStatus")],
        count: true,
        id: true,
    },
    RouteDef {
        path: "service/boards/{id}/items/{id}",
        operations: &[
            get_one("BoardItem"),
            DELETE_EMPTY,
            put_one("BoardItem"),
            patch_one("BoardItem"),
        ],
        count: false,
        id: false,
    },
    RouteDef {
        path: "service/boards/{id}/statuses/{id}",
        operations: &[
            get_one("BoardStatus"),
            DELETE_EMPTY,
            put_one("BoardStatus"),
            patch_one("BoardStatus"),
        ],
        count: false,
        id: false,
    },
    RouteDef {
        path: "service/boards/{id}/teams",
        operations: &[get_many("BoardTeam"), post_one("BoardTeam")],
        count: true,
        id: true,
    },
    RouteDef {
        path: "service/boards/{id}/teams/info",
        operations: &[get_many("BoardTeamInfo")],
        count: true,
        id: false,
    },
    RouteDef {
        path: "service/boards/{id}/teams/{id}",
        operations: &[
            get_one("BoardTeam"),
            DELETE_EMPTY,
            put_one("BoardTeam"),
            patch_one("BoardTeam"),
        ],
        count: false,
        id: false,
    },
    RouteDef {
        path: "service/knowledgebasesettings",
        operations: &[get_one("KnowledgeBaseSettings"), post_one("KnowledgeBaseSettings")],
        count: false,
        id: true,
    },
    RouteDef {
        path: "service/surveys",
        operations: &[get_many("ServiceSurvey"), post_one("ServiceSurvey")],
        count: true,
        id: true,
    },
    RouteDef {
        path: "service/surveys/{id}/questions/{id}/options/{id}",
        operations: &[
            get_one("SurveyOption"),
            DELETE_EMPTY,
            put_one("SurveyOption"),
            patch_one("SurveyOption"),
        ],
        count: false,
        id: false,
    },
    RouteDef {
        path: "service/teamMembers",
        operations: &[post_one("TeamMember")],
        count: false,
        id: false,
    },
    RouteDef {
        path: "service/teams",
        operations: &[get_many("ServiceTeam")],
        count: true,
        id: true,
    },
    RouteDef {
        path: "service/templates",
        operations: &[get_many("ServiceTemplate")],
        count: true,
        id: true,
    },
    RouteDef {
        path: "service/ticketLinks/info",
        operations: &[get_many("ServiceTicketLinkInfo")],
        count: true,
        id: false,
    },
    RouteDef {
        path: "service/tickets/{id}/activities",
        operations: &[get_many("ActivityReference")],
        count: true,
        id: false,
    },
    RouteDef {
        path: "system/certifications/{id}",
        operations: &[
            get_one("Certification"),
            delete_one("GenericMessageModel"),
            put_one("Certification"),
            patch_one("Certification"),
        ],
        count: false,
        id: false,
    },
    RouteDef {
        path: "system/documents",
        operations: &[get_many("DocumentInfo"), post_one("DocumentInfo")],
        count: true,
        id: true,
    },
    RouteDef {
        path: "system/emailTokens",
        operations: &[get_many("EmailToken")],
        count: true,
        id: true,
    },
    RouteDef {
        path: "system/info/links/{id}/resolveurl",
        operations: &[post_one("LinkResolveUrlInfo")],
        count: false,
        id: false,
    },
    RouteDef {
        path: "system/info/personas",
        operations: &[get_many("PersonasInfo")],
        count: true,
        id: true,
    },
    RouteDef {
        path: "system/kpiCategories",
        operations: &[get_many("KPICategory")],
        count: true,
        id: true,
    },
    RouteDef {
        path: "system/members/types/info",
        operations: &[get_many("MemberTypeInfo")],
        count: true,
        id: false,
    },
    RouteDef {
        path: "system/members/{id}/certifications",
        operations: &[get_many("MemberCertification"), post_one("MemberCertification")],
        count: true,
        id: true,
    },
    RouteDef {
        path: "system/osgradeweights/{id}",
        operations: &[
            get_one("OsGradeWeight"),
            put_one("OsGradeWeight"),
            patch_one("OsGradeWeight"),
        ],
        count: false,
        id: false,
    },
    RouteDef {
        path: "system/reportCards",
        operations: &[get_many("ReportCard"), post_one("ReportCard")],
        count: true,
        id: true,
    },
    RouteDef {
        path: "system/securityroles/info",
        operations: &[get_many("SecurityRoleInfo")],
        count: true,
        id: false,
    },
    RouteDef {
        path: "system/workflows/{id}/copy",
        operations: &[post_one("Workflow")],
        count: false,
        id: false,
    },
    RouteDef {
        path: "time/accruals",
        operations: &[get_many("TimeAccrual"), post_one("TimeAccrual")],
        count: true,
        id: true,
    },
    RouteDef {
        path: "time/chargeCodes/info",
        operations: &[get_many("ChargeCodeInfo")],
        count: true,
        id: false,
    },
    RouteDef {
        path: "time/entries/{id}",
        operations: &[
            get_one("TimeEntry"),
            delete_one("GenericMessageModel"),
            put_one("TimeEntry"),
            patch_one("TimeEntry"),
        ],
        count: false,
        id: false,
    },
    RouteDef {
        path: "time/ticketstopwatches/{id}",
        operations: &[
            get_one("TicketStopwatch"),
            DELETE_EMPTY,
            put_one("TicketStopwatch"),
            patch_one("TicketStopwatch"),
        ],
        count: false,
        id: false,
    },
    RouteDef {
        path: "time/workRoles/{id}/locations",
        operations: &[get_many("WorkRoleLocation"), post_one("WorkRoleLocation")],
        count: true,
        id: true,
    },
];
